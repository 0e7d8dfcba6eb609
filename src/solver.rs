//! Configured front end over the search.

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    Result,
    config::{OpeningPolicy, SolverConfig},
    search,
    tictactoe::{Action, Board, result, utility},
};

/// Plays optimal moves with a seeded random source for the opening.
pub struct Solver {
    config: SolverConfig,
    rng: StdRng,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Reset the random source. `None` draws a fresh seed.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
        self.rng = seeded_rng(seed);
    }

    /// Optimal action for the player to move, `None` once the game is over
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        match self.config.opening {
            OpeningPolicy::RandomCorner => search::minimax_with_rng(board, &mut self.rng),
            OpeningPolicy::FullSearch => search::best_action(board),
        }
    }

    /// Play optimal moves for both sides until the game ends.
    ///
    /// Returns every board from `board` up to and including the terminal one.
    ///
    /// # Errors
    ///
    /// Only if the search proposes an illegal action, which indicates a bug.
    pub fn self_play(&mut self, board: &Board) -> Result<Vec<Board>> {
        let mut line = vec![*board];
        let mut current = *board;

        while let Some(action) = self.best_action(&current) {
            current = result(&current, action)?;
            debug!(%action, board = %current.encode(), "self-play move");
            line.push(current);
        }

        debug!(
            moves = line.len() - 1,
            utility = utility(&current),
            "self-play finished"
        );
        Ok(line)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::CORNERS,
        tictactoe::{initial_state, terminal},
    };

    #[test]
    fn test_same_seed_same_opening() {
        let config = SolverConfig::new().with_seed(1234);
        let first = Solver::new(config.clone()).best_action(&initial_state());
        let second = Solver::new(config).best_action(&initial_state());
        assert_eq!(first, second);
        assert!(CORNERS.contains(&first.unwrap()));
    }

    #[test]
    fn test_reseed_replays_choice() {
        let mut solver = Solver::new(SolverConfig::new().with_seed(9));
        let first = solver.best_action(&initial_state());
        solver.reseed(Some(9));
        assert_eq!(solver.best_action(&initial_state()), first);
    }

    #[test]
    fn test_self_play_from_late_position() {
        let start = Board::from_string("XX.OO....").unwrap();
        let line = Solver::default().self_play(&start).unwrap();
        assert_eq!(line.len(), 2);
        assert_eq!(line[0], start);
        assert!(terminal(&line[1]));
        assert_eq!(utility(&line[1]), 1);
    }

    #[test]
    fn test_self_play_from_terminal_board() {
        let start = Board::from_string("XOXXOOOXX").unwrap();
        let line = Solver::default().self_play(&start).unwrap();
        assert_eq!(line, vec![start]);
    }
}
