//! Stonehenge CLI - Command-line interface
//!
//! Commands:
//! - play: interactive game against a chosen strategy
//! - solve: strategy self-play with a move-by-move report

use clap::{Parser, Subcommand, ValueEnum};
use stonehenge_core::{
    choose_move_exact, choose_move_heuristic, choose_move_iterative, GameState, Move,
};

mod play;
mod solve;

#[derive(Parser)]
#[command(name = "stonehenge")]
#[command(about = "Stonehenge ley-line capture game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against a strategy
    Play(play::PlayArgs),
    /// Let a strategy play itself and report the game
    Solve(solve::SolveArgs),
}

/// Which move-selection strategy drives the computer player
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Exact recursive search (slow beyond small boards)
    Exact,
    /// Exact iterative search, same values without deep recursion
    Iterative,
    /// Two-ply rough-outcome lookahead
    Heuristic,
}

impl StrategyKind {
    pub fn choose_move(self, state: &GameState) -> Option<Move> {
        match self {
            StrategyKind::Exact => choose_move_exact(state),
            StrategyKind::Iterative => choose_move_iterative(state),
            StrategyKind::Heuristic => choose_move_heuristic(state),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Solve(args) => solve::run(args),
    }
}
