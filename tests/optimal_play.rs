//! End-to-end behaviour of the minimax search

use rand::{SeedableRng, rngs::StdRng};
use tictactoe_minimax::{
    Action, Board, CORNERS, OpeningPolicy, Piece, Solver, SolverConfig, actions, evaluate_actions,
    initial_state, minimax, minimax_with_rng, player, result, terminal, utility, winner,
};

fn board(s: &str) -> Board {
    Board::from_string(s).unwrap()
}

/// Play `optimal` as one side against every possible line of the other side
/// and return the worst utility reached, from `optimal`'s perspective.
fn worst_case_against_all_replies(state: &Board, optimal: Piece) -> i32 {
    if terminal(state) {
        return match optimal {
            Piece::X => utility(state),
            Piece::O => -utility(state),
        };
    }

    if player(state) == optimal {
        let action = minimax(state).expect("non-terminal board has a move");
        let next = result(state, action).unwrap();
        worst_case_against_all_replies(&next, optimal)
    } else {
        actions(state)
            .into_iter()
            .map(|action| worst_case_against_all_replies(&result(state, action).unwrap(), optimal))
            .min()
            .unwrap_or(0)
    }
}

#[test]
fn opening_move_is_a_corner() {
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let action = minimax_with_rng(&initial_state(), &mut rng).unwrap();
        assert!(CORNERS.contains(&action), "seed {seed} opened on {action}");
    }
    assert!(CORNERS.contains(&minimax(&initial_state()).unwrap()));
}

#[test]
fn self_play_always_draws() {
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = initial_state();
        while let Some(action) = minimax_with_rng(&state, &mut rng) {
            state = result(&state, action).unwrap();
        }
        assert!(terminal(&state));
        assert_eq!(utility(&state), 0, "seed {seed} ended on\n{state}");
    }
}

#[test]
fn self_play_from_every_opening_draws() {
    for action in actions(&initial_state()) {
        let opened = result(&initial_state(), action).unwrap();
        let line = Solver::default().self_play(&opened).unwrap();
        let last = line.last().unwrap();
        assert_eq!(utility(last), 0, "opening {action} ended on\n{last}");
    }
}

#[test]
fn takes_the_winning_square() {
    // X X .
    // O O .
    // . . .
    let state = board("XX./OO./...");
    assert_eq!(player(&state), Piece::X);

    let action = minimax(&state).unwrap();
    assert_eq!(action, Action::new(0, 2));
    assert_eq!(winner(&result(&state, action).unwrap()), Some(Piece::X));
}

#[test]
fn fills_last_cell() {
    let state = board("XOX/OXO/OX.");
    assert!(!terminal(&state));
    let action = minimax(&state).unwrap();
    assert_eq!(action, Action::new(2, 2));
    assert!(terminal(&result(&state, action).unwrap()));
}

#[test]
fn terminal_board_has_no_move() {
    assert_eq!(minimax(&board("XXX/OO./...")), None);
    assert_eq!(minimax(&board("XOX/XOO/OXX")), None);
}

#[test]
fn o_never_loses() {
    assert_eq!(worst_case_against_all_replies(&initial_state(), Piece::O), 0);
}

#[test]
fn x_never_loses_from_any_corner() {
    for corner in CORNERS {
        let opened = result(&initial_state(), corner).unwrap();
        assert_eq!(
            worst_case_against_all_replies(&opened, Piece::X),
            0,
            "X lost a line after opening on {corner}"
        );
    }
}

#[test]
fn empty_board_values_are_all_draws() {
    let values = evaluate_actions(&initial_state());
    assert_eq!(values.len(), 9);
    assert!(values.iter().all(|&(_, value)| value == 0));
}

#[test]
fn full_search_opening_is_deterministic() {
    let config = SolverConfig::new().with_opening(OpeningPolicy::FullSearch);
    let first = Solver::new(config.clone()).best_action(&initial_state());
    let second = Solver::new(config).best_action(&initial_state());
    // All nine openings draw, so the row-major first one is kept
    assert_eq!(first, Some(Action::new(0, 0)));
    assert_eq!(first, second);
}
