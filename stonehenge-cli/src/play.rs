//! Play command - interactive game against a strategy
//!
//! The loop renders the board, reads and validates the human move
//! (re-prompting on malformed or invalid input), and answers with the
//! selected strategy until the game is decided.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use stonehenge_core::{parse_move, GameSetup, GameState, Move, Player};

use crate::StrategyKind;

#[derive(Args)]
pub struct PlayArgs {
    /// Board side length
    #[arg(long, default_value = "2")]
    pub side: usize,

    /// Let player 2 (the computer) move first
    #[arg(long)]
    pub second: bool,

    /// Strategy for the computer player
    #[arg(long, value_enum, default_value = "heuristic")]
    pub strategy: StrategyKind,

    /// Load a game setup JSON file instead of --side
    #[arg(long, value_name = "FILE")]
    pub setup: Option<PathBuf>,
}

const INSTRUCTIONS: &str = "Players take turns claiming cells. When a player \
captures at least half of the cells in a ley-line, the player captures the \
ley-line. The first player to capture at least half of the ley-lines wins.";

pub fn run(args: PlayArgs) -> Result<()> {
    let mut state = initial_state(&args)?;
    // The human always plays P1; --second only changes who opens
    let human = Player::P1;

    println!("{INSTRUCTIONS}\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{state}");
        if state.is_over() {
            announce_winner(&state, human);
            return Ok(());
        }
        if state.current_player() == human {
            let mv = read_move(&state, &mut input)?;
            state = state.make_move(mv)?;
        } else {
            let mv = match args.strategy.choose_move(&state) {
                Some(mv) => mv,
                None => bail!("strategy returned no move for a live game"),
            };
            tracing::info!("computer plays {}", mv);
            println!("Computer plays {mv}");
            state = state.make_move(mv)?;
        }
    }
}

fn initial_state(args: &PlayArgs) -> Result<GameState> {
    let state = match &args.setup {
        Some(path) => GameSetup::load(path)?.to_game_state()?,
        None => GameState::new(args.side, !args.second)?,
    };
    Ok(state)
}

/// Prompt until the input parses and names an unclaimed cell
fn read_move(state: &GameState, input: &mut impl BufRead) -> Result<Move> {
    loop {
        print!("Enter a move: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        let mv = match parse_move(&line) {
            Some(mv) => mv,
            None => {
                println!("Moves are uppercase letters, like A or AB.");
                continue;
            }
        };
        if !state.is_valid_move(mv) {
            println!("{mv} is not an open cell.");
            continue;
        }
        return Ok(mv);
    }
}

fn announce_winner(state: &GameState, human: Player) {
    let winner = if state.is_winner(Player::P1) {
        Player::P1
    } else {
        Player::P2
    };
    if winner == human {
        println!("You win!");
    } else {
        println!("Computer wins.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(second: bool) -> PlayArgs {
        PlayArgs {
            side: 2,
            second,
            strategy: StrategyKind::Heuristic,
            setup: None,
        }
    }

    #[test]
    fn test_second_flag_flips_the_starter() {
        let first = initial_state(&args(false)).unwrap();
        assert_eq!(first.current_player(), Player::P1);
        let second = initial_state(&args(true)).unwrap();
        assert_eq!(second.current_player(), Player::P2);
    }
}
