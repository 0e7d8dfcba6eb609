//! Solve command - report the optimal move for one position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::parse_board;
use crate::{
    cli::{config::CommonArgs, output},
    search,
    solver::Solver,
    tictactoe::{Action, Board, Piece, player, terminal, utility, winner},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct SolveArgs {
    /// Board as nine cells, row-major ('.' empty), e.g. "XO..X...."
    pub board: String,

    /// List the minimax value of every legal move
    #[arg(long)]
    pub all: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Serialize)]
struct ActionValue {
    action: Action,
    value: i32,
}

#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    to_move: Piece,
    terminal: bool,
    winner: Option<Piece>,
    utility: Option<i32>,
    best_action: Option<Action>,
    value: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<ActionValue>>,
}

fn build_report(board: &Board, solver: &mut Solver, all: bool) -> SolveReport {
    let is_terminal = terminal(board);
    let actions = all.then(|| {
        search::evaluate_actions(board)
            .into_iter()
            .map(|(action, value)| ActionValue { action, value })
            .collect::<Vec<_>>()
    });

    SolveReport {
        board: board.encode(),
        to_move: player(board),
        terminal: is_terminal,
        winner: winner(board),
        utility: is_terminal.then(|| utility(board)),
        best_action: solver.best_action(board),
        value: search::value(board),
        actions,
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let mut solver = Solver::new(args.common.solver_config());
    let report = build_report(&board, &mut solver, args.all);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_section("Position");
    output::print_board(&board);
    println!();
    output::print_kv("To move", &report.to_move.to_string());
    output::print_kv("Status", &output::describe_status(&board));

    match report.best_action {
        Some(action) => {
            output::print_kv("Optimal move", &action.to_string());
            output::print_kv("Outcome", output::describe_value(report.value));
        }
        None => output::print_kv("Optimal move", "none (game over)"),
    }

    if let Some(values) = &report.actions {
        output::print_section("All moves");
        for entry in values {
            output::print_kv(
                &entry.action.to_string(),
                output::describe_value(entry.value),
            );
        }
    }

    Ok(())
}
