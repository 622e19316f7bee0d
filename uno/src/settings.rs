use tracing::{debug, warn};

use crate::{
    constants::{MAX_PLAYERS, MIN_PLAYERS},
    error::{Result, UnoError},
    player::Player,
};

/// How many players a lobby needs before it can begin, and how many it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LobbyConfig {
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}

/// Players waiting in the lobby (`staging`) and the roster they were last
/// finalized into (`players`).
#[derive(Clone, Debug, Default)]
pub struct GameSettings {
    config: LobbyConfig,
    staging: Vec<Player>,
    players: Vec<Player>,
}

impl GameSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LobbyConfig) -> Result<Self> {
        if config.min_players == 0 {
            return Err(UnoError::bad_input("A game needs at least one player"));
        }
        if config.min_players > config.max_players {
            return Err(UnoError::bad_input(format!(
                "Minimum of {} players is above the maximum of {}",
                config.min_players, config.max_players
            )));
        }

        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    /// Adds a player to the lobby. Fails without changing anything when the
    /// lobby is already full.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if !self.can_add_player() {
            warn!(player = player.name(), "Lobby is full");
            return Err(UnoError::bad_input(format!(
                "The lobby is full ({} players)",
                self.config.max_players
            )));
        }

        debug!(player = player.name(), "Player joined the lobby");
        self.staging.push(player);
        Ok(())
    }

    pub fn remove_player(&mut self, index: usize) -> Result<Player> {
        if index >= self.staging.len() {
            return Err(UnoError::IndexOutOfRange {
                index,
                len: self.staging.len(),
            });
        }

        let player = self.staging.remove(index);
        debug!(player = player.name(), "Player left the lobby");
        Ok(player)
    }

    pub fn player_count(&self) -> usize {
        self.staging.len()
    }

    pub fn can_add_player(&self) -> bool {
        self.staging.len() < self.config.max_players
    }

    pub fn can_remove_player(&self) -> bool {
        !self.staging.is_empty()
    }

    pub fn can_begin(&self) -> bool {
        self.staging.len() >= self.config.min_players
    }

    /// Snapshots the lobby into the roster. The lobby itself is kept.
    pub fn finalize_players(&mut self) {
        self.players = self.staging.clone();
        debug!(players = self.players.len(), "Finalized players");
    }

    pub fn clear_staging(&mut self) {
        self.staging.clear();
        debug!("Cleared lobby");
    }

    pub fn staging(&self) -> &[Player] {
        &self.staging
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
}
