use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board width and height must be positive")]
    InvalidSize,
    #[error("At least one hazard is required")]
    NoHazards,
    #[error("Too many hazards, at least one safe cell is required")]
    TooManyHazards,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Saved board is inconsistent")]
    InvalidSnapshot,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
