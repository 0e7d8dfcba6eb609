//! Exhaustive minimax search.
//!
//! The search walks the whole game tree below the given board. There is no
//! pruning and no memoisation: from the empty board the tree has fewer than
//! 9! leaves, and the search only runs there when the opening shortcut is
//! disabled.
//!
//! Actions are enumerated row-major (see [`actions`]). Among moves with equal
//! value the first one in that order is kept.

use rand::{Rng, seq::IndexedRandom};
use tracing::{debug, trace};

use crate::tictactoe::{Action, Board, Piece, actions, player, result, terminal, utility};

/// Squares the opening move is drawn from.
///
/// Every first move draws under optimal play; taking a corner is a policy
/// choice, not a search result.
pub const CORNERS: [Action; 4] = [
    Action::new(0, 0),
    Action::new(0, 2),
    Action::new(2, 0),
    Action::new(2, 2),
];

/// Returns the optimal action for the player to move, or `None` if the game
/// is over. The opening corner is drawn from the thread-local generator.
pub fn minimax(board: &Board) -> Option<Action> {
    minimax_with_rng(board, &mut rand::rng())
}

/// [`minimax`] with an explicit random source for the opening move.
pub fn minimax_with_rng<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Action> {
    if terminal(board) {
        return None;
    }

    if let Some(corner) = opening_corner(board, rng) {
        return Some(corner);
    }

    best_action(board)
}

/// Random corner when X opens on an empty board, `None` otherwise
pub fn opening_corner<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Action> {
    if player(board) != Piece::X || !board.is_empty_board() {
        return None;
    }

    let corner = CORNERS.choose(rng).copied();
    if let Some(action) = corner {
        debug!(%action, "opening move drawn from corners");
    }
    corner
}

/// Full minimax without the opening shortcut.
///
/// X keeps the first action reaching a new strict maximum, O the first
/// reaching a new strict minimum.
pub fn best_action(board: &Board) -> Option<Action> {
    let to_move = player(board);
    let mut best: Option<(Action, i32)> = None;

    for (action, value) in evaluate_actions(board) {
        let improves = match best {
            None => true,
            Some((_, best_value)) => match to_move {
                Piece::X => value > best_value,
                Piece::O => value < best_value,
            },
        };
        if improves {
            best = Some((action, value));
        }
    }

    if let Some((action, value)) = best {
        debug!(player = %to_move, %action, value, "minimax selected action");
    }
    best.map(|(action, _)| action)
}

/// Minimax value of every legal action, in row-major order.
///
/// Empty when `board` is terminal.
pub fn evaluate_actions(board: &Board) -> Vec<(Action, i32)> {
    if terminal(board) {
        return Vec::new();
    }

    let to_move = player(board);
    successors(board)
        .map(|(action, next)| {
            let value = match to_move {
                Piece::X => min_value(&next),
                Piece::O => max_value(&next),
            };
            trace!(%action, value, "evaluated root action");
            (action, value)
        })
        .collect()
}

/// Game-theoretic value of `board` from X's perspective
pub fn value(board: &Board) -> i32 {
    match player(board) {
        Piece::X => max_value(board),
        Piece::O => min_value(board),
    }
}

/// Best outcome X can force with X to move
pub fn max_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .max()
        .unwrap_or_else(|| utility(board))
}

/// Best outcome O can force with O to move
pub fn min_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .min()
        .unwrap_or_else(|| utility(board))
}

fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    actions(board)
        .into_iter()
        .filter_map(move |action| result(board, action).ok().map(|next| (action, next)))
}
