//! Turn order, move generation, and game-end detection.
//!
//! Every function here is a pure function of a [`Board`]. None of them look
//! at history; the player to move is derived from piece counts.

use std::collections::BTreeSet;

use super::{
    board::{Action, Board, Cell, Piece, piece_count},
    lines::LineAnalyzer,
};
use crate::error::{ActionFault, Error, Result};

/// Returns the piece that moves next on `board`.
///
/// X moves when both sides have placed the same number of pieces, otherwise O.
/// Boards where O is ahead, or X is ahead by more than one, also yield O.
pub fn player(board: &Board) -> Piece {
    if piece_count(Piece::X, board) == piece_count(Piece::O, board) {
        Piece::X
    } else {
        Piece::O
    }
}

/// Returns every empty coordinate on `board`, iterating row-major.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    let mut moves = BTreeSet::new();
    for (row, cells) in board.cells().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Cell::Empty {
                moves.insert(Action::new(row as i32, col as i32));
            }
        }
    }
    moves
}

/// Returns the board that results from the player to move marking `action`.
///
/// # Errors
///
/// [`Error::InvalidAction`] when `action` lies outside the grid or targets an
/// occupied cell.
#[must_use = "result returns a new board; the original is unchanged"]
pub fn result(board: &Board, action: Action) -> Result<Board> {
    let invalid = |reason| Error::InvalidAction {
        row: action.row,
        col: action.col,
        reason,
    };

    let (row, col) = action
        .indices()
        .ok_or_else(|| invalid(ActionFault::OutOfBounds))?;

    if board.cells()[row][col] != Cell::Empty {
        return Err(invalid(ActionFault::Occupied));
    }

    Ok(board.with_cell(row, col, player(board).to_cell()))
}

/// Returns the owner of the first completed line, or `None`.
pub fn winner(board: &Board) -> Option<Piece> {
    LineAnalyzer::first_complete_line(board)
}

/// Check if the game is over (win or full board)
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// 1 if X has won, -1 if O has won, 0 otherwise.
///
/// Only meaningful on terminal boards.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Piece::X) => 1,
        Some(Piece::O) => -1,
        None => 0,
    }
}
