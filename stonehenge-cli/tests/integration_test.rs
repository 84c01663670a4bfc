//! Integration tests for the Stonehenge game
//!
//! Tests the full stack: board geometry, rules, all three strategies,
//! and setup files.

use stonehenge_core::{
    board::BoardLayout,
    choose_move_exact, choose_move_heuristic, choose_move_iterative, iterative_value,
    negamax_value, parse_move,
    game::{GameState, Move, Player},
    leyline::{lines_for, LineStatus, Orientation},
    GameSetup,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn game(side: usize) -> GameState {
    GameState::new(side, true).unwrap()
}

fn mv(label: &str) -> Move {
    parse_move(label).unwrap()
}

/// Play a whole game with the given chooser, returning every state
fn play_out(mut state: GameState, choose: fn(&GameState) -> Option<Move>) -> Vec<GameState> {
    let mut states = vec![state.clone()];
    while let Some(m) = choose(&state) {
        state = state.make_move(m).unwrap();
        states.push(state.clone());
    }
    states
}

// ============================================================================
// GEOMETRY PROPERTIES
// ============================================================================

#[test]
fn test_cell_and_line_counts() {
    for side in 1..=5 {
        let layout = BoardLayout::new(side).unwrap();
        let expected: usize = (1..=side).map(|i| i + 2).sum();
        assert_eq!(layout.total_cells(), expected);

        let line_total: usize = Orientation::ALL
            .iter()
            .map(|&o| lines_for(o, layout).len())
            .sum();
        assert_eq!(line_total, 3 * (side + 1));
    }
}

#[test]
fn test_side_one_scenario() {
    // 3 cells; the first player wins immediately with any opening move.
    let root = game(1);
    assert_eq!(root.legal_moves().len(), 3);
    assert_eq!(negamax_value(&root), 1);

    let best = choose_move_exact(&root).unwrap();
    assert_eq!(best, mv("A"));
    let end = root.make_move(best).unwrap();
    assert!(end.is_over());
    assert!(end.is_winner(Player::P1));
    assert!(!end.is_winner(Player::P2));
}

// ============================================================================
// STRATEGY AGREEMENT AND TERMINATION
// ============================================================================

#[test]
fn test_exact_and_iterative_play_identically() {
    let mut state = game(2);
    while !state.is_over() {
        let recursive = choose_move_exact(&state);
        let iterative = choose_move_iterative(&state);
        assert_eq!(recursive, iterative);
        assert_eq!(negamax_value(&state), iterative_value(&state));
        state = state.make_move(recursive.unwrap()).unwrap();
    }
    assert_eq!(choose_move_exact(&state), None);
    assert_eq!(choose_move_iterative(&state), None);
}

#[test]
fn test_every_strategy_finishes_a_game() {
    for choose in [
        choose_move_exact as fn(&GameState) -> Option<Move>,
        choose_move_iterative,
        choose_move_heuristic,
    ] {
        let states = play_out(game(2), choose);
        let last = states.last().unwrap();
        assert!(last.is_over());
        // Exactly one winner under the non-mover convention
        assert_ne!(last.is_winner(Player::P1), last.is_winner(Player::P2));
    }
}

#[test]
fn test_heuristic_handles_larger_board() {
    let states = play_out(game(3), choose_move_heuristic);
    assert!(states.last().unwrap().is_over());
    assert!(states.len() > 2);
}

// ============================================================================
// INVARIANTS ALONG REAL GAMES
// ============================================================================

#[test]
fn test_captures_stay_latched_during_play() {
    let states = play_out(game(2), choose_move_heuristic);
    for orientation in Orientation::ALL {
        for k in 0..=2 {
            let mut latched = None;
            for state in &states {
                match (latched, state.line_status(orientation, k)) {
                    (None, LineStatus::Captured(p)) => latched = Some(p),
                    (Some(p), status) => {
                        assert_eq!(status, LineStatus::Captured(p));
                    }
                    (None, LineStatus::Unclaimed) => {}
                }
            }
        }
    }
}

#[test]
fn test_terminal_states_are_sinks() {
    let states = play_out(game(2), choose_move_exact);
    let last = states.last().unwrap();
    assert!(last.is_over());
    assert!(last.legal_moves().is_empty());
    for m in [mv("A"), mv("G"), mv("Z")] {
        assert!(last.make_move(m).is_err());
    }
}

// ============================================================================
// PARSING AND SETUP FILES
// ============================================================================

#[test]
fn test_parse_pipeline() {
    assert_eq!(parse_move(" ab "), None);
    let m = parse_move(" AB ").unwrap();
    assert_eq!(m.label(), "AB");
    // Idempotent on its own canonical output
    assert_eq!(parse_move(&m.label()), Some(m));
    // Parses lexically, rejected by the board
    assert!(game(1).make_move(m).is_err());
}

#[test]
fn test_setup_file_roundtrip() {
    let setup = GameSetup {
        name: "roundtrip".to_string(),
        side_length: 3,
        p1_starts: false,
    };
    let path = std::env::temp_dir().join("stonehenge-setup-roundtrip.json");
    setup.save(&path).unwrap();
    let loaded = GameSetup::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, setup);

    let state = loaded.to_game_state().unwrap();
    assert_eq!(state.side(), 3);
    assert_eq!(state.current_player(), Player::P2);
}
