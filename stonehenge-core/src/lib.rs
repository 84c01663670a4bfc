//! Stonehenge Core - Game engine and search
//!
//! This crate provides the core logic for the Stonehenge board game:
//! - Triangular board geometry with unbounded cell labels
//! - Ley-line membership (closed form) and sticky capture
//! - Immutable game states with explicit move validation
//! - Terminal and winner rules
//! - Three move-selection strategies: exact recursive negamax, an
//!   iterative work-stack equivalent, and a bounded two-ply heuristic

pub mod board;
pub mod game;
pub mod leyline;
pub mod render;
pub mod search;
pub mod setup;

// Re-exports for convenient access
pub use board::BoardLayout;
pub use game::{parse_move, CellState, GameError, GameState, Move, Player};
pub use leyline::{evaluate_capture, lines_for, LineStatus, Orientation};
pub use render::render;
pub use search::{
    choose_move_exact, choose_move_heuristic, choose_move_iterative, iterative_value,
    negamax_value, rough_outcome,
};
pub use setup::GameSetup;
