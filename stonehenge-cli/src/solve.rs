//! Solve command - strategy self-play
//!
//! Plays both sides with the selected strategy and reports the move
//! sequence and winner, as text or JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use stonehenge_core::{GameSetup, GameState, Player};

use crate::StrategyKind;

#[derive(Args)]
pub struct SolveArgs {
    /// Board side length
    #[arg(long, default_value = "2")]
    pub side: usize,

    /// Let player 2 move first
    #[arg(long)]
    pub second: bool,

    /// Strategy for both sides
    #[arg(long, value_enum, default_value = "exact")]
    pub strategy: StrategyKind,

    /// Load a game setup JSON file instead of --side
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, Serialize)]
struct SolveReport {
    side_length: usize,
    strategy: String,
    moves: Vec<String>,
    winner: String,
}

pub fn run(args: SolveArgs) -> Result<()> {
    let state = initial_state(&args)?;

    tracing::info!(
        "solving side {} with {:?} strategy",
        state.side(),
        args.strategy
    );

    let report = play_out(state, args.strategy)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Moves: {}", report.moves.join(" "));
        println!("Winner: {}", report.winner);
    }
    Ok(())
}

fn initial_state(args: &SolveArgs) -> Result<GameState> {
    let state = match &args.setup {
        Some(path) => GameSetup::load(path)?.to_game_state()?,
        None => GameState::new(args.side, !args.second)?,
    };
    Ok(state)
}

fn play_out(mut state: GameState, strategy: StrategyKind) -> Result<SolveReport> {
    let side_length = state.side();
    let mut moves = Vec::new();

    while let Some(mv) = strategy.choose_move(&state) {
        moves.push(mv.label());
        state = state.make_move(mv)?;
    }

    let winner = if state.is_winner(Player::P1) { "p1" } else { "p2" };
    Ok(SolveReport {
        side_length,
        strategy: format!("{:?}", strategy).to_lowercase(),
        moves,
        winner: winner.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(second: bool) -> SolveArgs {
        SolveArgs {
            side: 2,
            second,
            strategy: StrategyKind::Iterative,
            setup: None,
            json: false,
        }
    }

    #[test]
    fn test_second_flag_flips_the_starter() {
        // Same meaning as play's --second: player 2 opens
        let first = initial_state(&args(false)).unwrap();
        assert_eq!(first.current_player(), Player::P1);
        let second = initial_state(&args(true)).unwrap();
        assert_eq!(second.current_player(), Player::P2);
    }

    #[test]
    fn test_self_play_report() {
        let report = play_out(initial_state(&args(false)).unwrap(), StrategyKind::Heuristic)
            .unwrap();
        assert!(!report.moves.is_empty());
        assert!(report.winner == "p1" || report.winner == "p2");
        assert_eq!(report.side_length, 2);
    }
}
