//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Cell, Piece};

/// A line as three (row, col) coordinates
pub type Line = [(usize, usize); 3];

/// The eight winning lines in the order [`super::rules::winner`] checks them:
/// rows and columns interleaved, then the main and anti diagonals.
pub static WINNING_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)], // row 0
    [(0, 0), (1, 0), (2, 0)], // col 0
    [(1, 0), (1, 1), (1, 2)], // row 1
    [(0, 1), (1, 1), (2, 1)], // col 1
    [(2, 0), (2, 1), (2, 2)], // row 2
    [(0, 2), (1, 2), (2, 2)], // col 2
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Piece owning `line`, if its three cells are equal and non-empty
    pub fn line_owner(board: &Board, line: &Line) -> Option<Piece> {
        let cells = board.cells();
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let first = cells[r0][c0];
        if first != Cell::Empty && first == cells[r1][c1] && first == cells[r2][c2] {
            first.piece()
        } else {
            None
        }
    }

    /// Owner of the first completed line in check order
    pub fn first_complete_line(board: &Board) -> Option<Piece> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(board, line))
    }

    /// Check if a piece holds any complete line
    pub fn has_won(board: &Board, piece: Piece) -> bool {
        Self::winning_lines(board, piece).next().is_some()
    }

    /// All lines completed by `piece`
    pub fn winning_lines(
        board: &Board,
        piece: Piece,
    ) -> impl Iterator<Item = &'static Line> + '_ {
        WINNING_LINES
            .iter()
            .filter(move |line| Self::line_owner(board, line) == Some(piece))
    }
}
