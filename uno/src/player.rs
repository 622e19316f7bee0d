use crate::{card::Card, hand::Hand};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    id: Option<String>,
    points: u32,
    hand: Hand,
    force_draws: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            points: 0,
            hand: Hand::new(),
            force_draws: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` until an id has been assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the id, replacing any earlier one.
    pub fn assign_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Number of penalty cards this player still has to draw.
    pub fn force_draws(&self) -> u32 {
        self.force_draws
    }

    pub fn add_force_draw(&mut self, count: u32) {
        self.force_draws += count;
    }

    pub fn decrease_force_draw(&mut self) {
        self.force_draws = self.force_draws.saturating_sub(1);
    }

    pub fn remove_force_draw(&mut self) {
        self.force_draws = 0;
    }
}
