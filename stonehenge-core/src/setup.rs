//! Game setup files
//!
//! A small JSON-serializable description of a game: board size and who
//! moves first. Used by the CLI to start games from files instead of
//! flags.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::game::{GameError, GameState};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub name: String,
    pub side_length: usize,
    pub p1_starts: bool,
}

impl GameSetup {
    /// Construct the initial game state this setup describes
    pub fn to_game_state(&self) -> Result<GameState, GameError> {
        GameState::new(self.side_length, self.p1_starts)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading setup file {}", path.display()))?;
        let setup: GameSetup = serde_json::from_str(&content)
            .with_context(|| format!("parsing setup file {}", path.display()))?;
        Ok(setup)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing setup file {}", path.display()))?;
        Ok(())
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            side_length: 2,
            p1_starts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_default_setup_builds() {
        let state = GameSetup::default().to_game_state().unwrap();
        assert_eq!(state.side(), 2);
        assert_eq!(state.current_player(), Player::P1);
    }

    #[test]
    fn test_invalid_setup_rejected() {
        let setup = GameSetup {
            name: "broken".to_string(),
            side_length: 0,
            p1_starts: true,
        };
        assert!(setup.to_game_state().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let setup = GameSetup {
            name: "five".to_string(),
            side_length: 5,
            p1_starts: false,
        };
        let json = serde_json::to_string(&setup).unwrap();
        let back: GameSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(back, setup);
    }
}
