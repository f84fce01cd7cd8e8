//! Error types.

use thiserror::Error;

/// Errors from game configuration and play
#[derive(Debug, Error)]
pub enum GameError {
    #[error("at least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("an odd number of moves is required, got {0}")]
    EvenMoveCount(usize),

    #[error("duplicate move: '{0}' is used more than once")]
    DuplicateMove(String),

    #[error("choice {choice} is out of range (expected 1..={max})")]
    InvalidChoice { choice: usize, max: usize },

    #[error("move '{0}' is not in the configured move set")]
    UnknownMove(String),

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),

    #[error("round already resolved")]
    RoundResolved,
}
