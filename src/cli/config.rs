//! Shared configuration for CLI commands

use clap::Args;

use crate::config::{OpeningPolicy, SolverConfig};

/// Options every command accepts
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Random seed for the opening corner
    #[arg(long)]
    pub seed: Option<u64>,

    /// How X's first move on an empty board is chosen
    #[arg(long, value_enum, default_value_t = OpeningPolicy::RandomCorner)]
    pub opening: OpeningPolicy,
}

impl CommonArgs {
    pub fn solver_config(&self) -> SolverConfig {
        let config = SolverConfig::new().with_opening(self.opening);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
