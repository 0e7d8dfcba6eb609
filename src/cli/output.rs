//! Text output helpers for CLI

use crate::tictactoe::{Board, terminal, winner};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{key}:"), value);
}

/// Print a board indented under a header
pub fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

/// Human-readable game status
pub fn describe_status(board: &Board) -> String {
    match winner(board) {
        Some(piece) => format!("{piece} wins"),
        None if terminal(board) => "draw".to_string(),
        None => "in progress".to_string(),
    }
}

/// Outcome from X's perspective as a word
pub fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_status() {
        assert_eq!(describe_status(&Board::new()), "in progress");
        let won = Board::from_string("XXXOO....").unwrap();
        assert_eq!(describe_status(&won), "X wins");
        let drawn = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(describe_status(&drawn), "draw");
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(1), "X wins");
        assert_eq!(describe_value(-1), "O wins");
        assert_eq!(describe_value(0), "draw");
    }
}
