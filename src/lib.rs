//! Optimal Tic-Tac-Toe via exhaustive minimax
//!
//! This crate provides:
//! - An immutable 3x3 board and the rules derived from it (turn order, legal
//!   actions, move results, winner and terminal detection, utility)
//! - Full game-tree minimax search returning the optimal action
//! - A configurable [`Solver`] with a seeded random source for the opening
//!
//! ```
//! use tictactoe_minimax::{initial_state, minimax, result, terminal, winner};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action).unwrap();
//! }
//! assert!(terminal(&board));
//! assert_eq!(winner(&board), None);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod solver;
pub mod tictactoe;

pub use config::{OpeningPolicy, SolverConfig};
pub use error::{ActionFault, Error, Result};
pub use search::{CORNERS, evaluate_actions, minimax, minimax_with_rng};
pub use solver::Solver;
pub use tictactoe::{
    Action, Board, Cell, Piece, actions, initial_state, piece_count, player, result, terminal,
    utility, winner,
};
