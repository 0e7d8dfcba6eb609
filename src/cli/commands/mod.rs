//! Subcommands of the `ttt` binary

pub mod play;
pub mod solve;

use anyhow::{Context, Result};

use crate::tictactoe::Board;

/// Parse a board argument and reject positions the rules cannot reach
pub fn parse_board(input: &str) -> Result<Board> {
    let board =
        Board::from_string(input).with_context(|| format!("failed to parse board '{input}'"))?;
    board
        .validate()
        .with_context(|| format!("board '{input}' cannot arise in a game where X moves first"))?;
    Ok(board)
}
