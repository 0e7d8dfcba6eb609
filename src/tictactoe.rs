//! Tic-Tac-Toe board and rules

pub mod board;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Action, Board, Cell, Piece, SIZE, initial_state, piece_count};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{actions, player, result, terminal, utility, winner};
