//! Engine errors.
//!
//! The engine has no recoverable error paths during play: these variants only
//! report caller or configuration mistakes so they fail fast instead of
//! corrupting state.

use thiserror::Error;

use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size {size} is not supported (expected {min}..={max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl GameError {
    pub fn invalid_board_size(size: usize) -> Self {
        GameError::InvalidBoardSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        }
    }
}

/// Check that `size` is a playable board size
pub fn validate_board_size(size: usize) -> Result<usize, GameError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(GameError::invalid_board_size(size))
    }
}
