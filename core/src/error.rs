use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Please enter your name to start the game.")]
    BlankPlayerName,
    #[error("A game is already in progress")]
    SessionLocked,
    #[error("Timer belongs to a superseded session")]
    StaleTimer,
    #[error("No game is running")]
    NotRunning,
    #[error("Game is not waiting for completion")]
    NotCompleting,
    #[error("Invalid cell index")]
    InvalidCell,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Grid must be square")]
    InvalidGridShape,
}

impl GameError {
    /// Whether the player can fix this by changing their input.
    pub const fn is_user_facing(self) -> bool {
        matches!(self, Self::BlankPlayerName)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
