//! Reachability checks for boards supplied from outside the engine.
//!
//! The rules never call into this module: they trust the piece-count
//! invariant. Callers that parse boards from users check them here first.

use super::{
    board::{Board, Piece, SIZE, piece_count},
    lines::{Line, LineAnalyzer},
};
use crate::error::{Error, Result};

impl Board {
    /// Check that this board can arise from the empty board with X moving first.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPieceCounts`] when X is not level with O or one ahead
    /// - [`Error::InvalidConfiguration`] when both sides have a line, the
    ///   winner did not move last, or a side's lines could not have been
    ///   completed by a single move
    pub fn validate(&self) -> Result<()> {
        let x_count = piece_count(Piece::X, self);
        let o_count = piece_count(Piece::O, self);

        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }

        let invalid = |reason: &str| Error::InvalidConfiguration {
            message: format!("board '{}': {reason}", self.encode()),
        };

        let x_wins = LineAnalyzer::has_won(self, Piece::X);
        let o_wins = LineAnalyzer::has_won(self, Piece::O);

        if x_wins && o_wins {
            return Err(invalid("both players cannot have winning lines"));
        }
        if x_wins && x_count != o_count + 1 {
            return Err(invalid("X won, so X must have moved last"));
        }
        if o_wins && x_count != o_count {
            return Err(invalid("O won, so O must have moved last"));
        }

        for piece in [Piece::X, Piece::O] {
            if !self.winning_lines_share_cell(piece) {
                return Err(invalid("winning lines must share the final move"));
            }
        }

        Ok(())
    }

    /// Check if the board state is reachable under the rules
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if all winning lines for a piece share at least one cell.
    /// Several lines can only be completed together by one move.
    pub fn winning_lines_share_cell(&self, piece: Piece) -> bool {
        let lines: Vec<&Line> = LineAnalyzer::winning_lines(self, piece).collect();

        // If fewer than 2 lines, trivially true
        if lines.len() < 2 {
            return true;
        }

        (0..SIZE).any(|row| {
            (0..SIZE).any(|col| lines.iter().all(|line| line.contains(&(row, col))))
        })
    }
}
