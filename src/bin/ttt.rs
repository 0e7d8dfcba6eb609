//! Command-line front end for the tic-tac-toe minimax engine.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tictactoe_minimax::cli::{self, commands};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Optimal tic-tac-toe via exhaustive minimax", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    Solve(commands::solve::SolveArgs),

    /// Play both sides optimally to the end
    Play(commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args),
        Commands::Play(args) => commands::play::execute(args),
    }
}
