//! Solver configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the first move of a game is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OpeningPolicy {
    /// X opens on a uniformly random corner without searching
    #[default]
    RandomCorner,
    /// Search the opening like any other position
    FullSearch,
}

/// Configuration for a [`crate::Solver`].
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::{OpeningPolicy, SolverConfig};
///
/// let config = SolverConfig::new()
///     .with_seed(42)
///     .with_opening(OpeningPolicy::FullSearch);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Random seed for the opening corner; `None` draws one from entropy
    pub seed: Option<u64>,
    pub opening: OpeningPolicy,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opening(mut self, opening: OpeningPolicy) -> Self {
        self.opening = opening;
        self
    }
}
