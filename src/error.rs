//! Error types for the tic-tac-toe engine

use std::fmt;

use thiserror::Error;

/// Why an action was rejected by [`crate::tictactoe::result`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFault {
    /// Row or column outside `0..=2`
    OutOfBounds,
    /// Target cell already holds a piece
    Occupied,
}

impl fmt::Display for ActionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionFault::OutOfBounds => write!(f, "out of bounds"),
            ActionFault::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action ({row}, {col}): {reason}")]
    InvalidAction {
        row: i32,
        col: i32,
        reason: ActionFault,
    },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this is the rules-level invalid-action error
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, Error::InvalidAction { .. })
    }
}
