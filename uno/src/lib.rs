pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod hand;
pub mod player;
pub mod settings;

pub use card::{Card, CardColor, CardValue};
pub use deck::Deck;
pub use error::{BadInputError, Result, UnoError};
pub use hand::Hand;
pub use player::Player;
pub use settings::{GameSettings, LobbyConfig};
