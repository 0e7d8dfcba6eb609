//! Play command - optimal self-play to the end of the game

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use super::parse_board;
use crate::{
    cli::{config::CommonArgs, output},
    solver::Solver,
    tictactoe::{Board, utility},
};

#[derive(Parser, Debug)]
#[command(about = "Play both sides optimally until the game ends")]
pub struct PlayArgs {
    /// Starting board (defaults to the empty board)
    #[arg(long)]
    pub from: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let start = match &args.from {
        Some(input) => parse_board(input)?,
        None => Board::new(),
    };

    let mut solver = Solver::new(args.common.solver_config());
    info!(seed = ?solver.config().seed, start = %start.encode(), "starting self-play");
    let line = solver
        .self_play(&start)
        .context("self-play produced an illegal move")?;

    for (ply, board) in line.iter().enumerate() {
        output::print_section(&format!("Ply {ply}"));
        output::print_board(board);
    }

    let last = line.last().copied().unwrap_or(start);
    println!();
    output::print_kv("Result", output::describe_value(utility(&last)));
    Ok(())
}
