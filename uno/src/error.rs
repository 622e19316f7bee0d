use thiserror::Error;

/// Raised when a caller hands the model something it cannot represent, such as
/// an unknown card code or a player beyond the lobby capacity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Bad input: {0}")]
pub struct BadInputError(String);

impl BadInputError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("The deck is empty")]
    EmptyDeck,
    #[error("Tried to draw {requested} cards but only {available} are left")]
    NotEnoughCards { requested: usize, available: usize },
    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    BadInput(#[from] BadInputError),
}

impl UnoError {
    pub(crate) fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput(BadInputError::new(message))
    }
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
