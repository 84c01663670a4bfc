//! Game state, move application, and rules

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{self, BoardLayout};
use crate::leyline::{self, LineStatus, Orientation};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Board digit used once a cell or line is claimed
    pub fn digit(self) -> char {
        match self {
            Player::P1 => '1',
            Player::P2 => '2',
        }
    }
}

/// State of a single board cell. Once claimed, never reverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Unclaimed,
    Claimed(Player),
}

/// A move: the identity of the cell to claim.
///
/// Rendered and parsed as an uppercase alphabetic label (`A`..`Z`, then
/// `AA`, `AB`, ...), so the label scheme is unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(usize);

impl Move {
    pub fn from_index(index: usize) -> Self {
        Move(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> String {
        board::label_of(self.0)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Errors raised by board construction and move application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid side length {0}: must be at least 1")]
    InvalidSideLength(usize),
    #[error("move {0} does not name an unclaimed cell")]
    InvalidMove(Move),
}

// ============================================================================
// MOVE PARSING
// ============================================================================

/// Parse raw move text.
///
/// Accepts input that, after trimming whitespace, is non-empty and
/// entirely uppercase alphabetic; everything else yields `None`, the
/// recoverable sentinel. Parsing is purely lexical: a well-formed label
/// that names no cell on the board parses fine and is rejected later by
/// [`GameState::make_move`].
pub fn parse_move(raw: &str) -> Option<Move> {
    let trimmed = raw.trim();
    board::index_of_label(trimmed).map(Move)
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Immutable-per-ply game snapshot.
///
/// Applying a move produces a fresh state; existing states are never
/// mutated, so search can hold any number of them without coordination.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    layout: BoardLayout,
    current: Player,
    cells: Vec<CellState>,
    left: Vec<LineStatus>,
    right: Vec<LineStatus>,
    up: Vec<LineStatus>,
}

impl GameState {
    /// Create the initial state for a board of the given side length
    pub fn new(side: usize, p1_starts: bool) -> Result<Self, GameError> {
        let layout = BoardLayout::new(side)?;
        let line_statuses = vec![LineStatus::Unclaimed; leyline::line_count(side)];
        Ok(Self {
            layout,
            current: if p1_starts { Player::P1 } else { Player::P2 },
            cells: vec![CellState::Unclaimed; layout.total_cells()],
            left: line_statuses.clone(),
            right: line_statuses.clone(),
            up: line_statuses,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Player to move next
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn side(&self) -> usize {
        self.layout.side()
    }

    /// State of the cell a move names, if it is on the board
    pub fn cell(&self, mv: Move) -> Option<CellState> {
        self.cells.get(mv.index()).copied()
    }

    /// Capture status of line `k` in the given orientation
    pub fn line_status(&self, orientation: Orientation, k: usize) -> LineStatus {
        self.lines(orientation)[k]
    }

    pub fn lines(&self, orientation: Orientation) -> &[LineStatus] {
        match orientation {
            Orientation::Left => &self.left,
            Orientation::Right => &self.right,
            Orientation::Up => &self.up,
        }
    }

    fn captured_by(&self, player: Player) -> usize {
        Orientation::ALL
            .iter()
            .flat_map(|&o| self.lines(o))
            .filter(|&&s| s == LineStatus::Captured(player))
            .count()
    }

    // ========================================================================
    // RULES
    // ========================================================================

    /// Whether the game is decided: a player holds at least half of all
    /// ley-lines, or no unclaimed cell remains.
    pub fn is_over(&self) -> bool {
        let total_lines = 3 * leyline::line_count(self.side());
        if 2 * self.captured_by(Player::P1) >= total_lines {
            return true;
        }
        if 2 * self.captured_by(Player::P2) >= total_lines {
            return true;
        }
        !self.cells.contains(&CellState::Unclaimed)
    }

    /// Whether `player` has won.
    ///
    /// The winner is whoever is NOT about to move when the game is
    /// recognized as over: `make_move` flips the turn before the next
    /// terminal check, and a full board with evenly split lines resolves
    /// the same way rather than reporting a draw.
    pub fn is_winner(&self, player: Player) -> bool {
        self.is_over() && self.current != player
    }

    // ========================================================================
    // MOVE ENUMERATION AND APPLICATION
    // ========================================================================

    /// All unclaimed cells in board order, or empty once the game is over.
    ///
    /// The collapse to empty is what lets search detect terminal states
    /// purely from the move count.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return vec![];
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == CellState::Unclaimed)
            .map(|(i, _)| Move(i))
            .collect()
    }

    /// Whether `mv` names a currently unclaimed cell in a live game
    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.cell(mv) == Some(CellState::Unclaimed) && !self.is_over()
    }

    /// Apply a move, returning the successor state.
    ///
    /// Rejects a move that does not name an unclaimed cell with
    /// [`GameError::InvalidMove`]; there is no silent no-op path.
    pub fn make_move(&self, mv: Move) -> Result<Self, GameError> {
        if !self.is_valid_move(mv) {
            return Err(GameError::InvalidMove(mv));
        }
        Ok(self.apply(mv))
    }

    /// Apply a move known to be legal. Callers outside `make_move` must
    /// only pass moves obtained from `legal_moves` on this state.
    pub(crate) fn apply(&self, mv: Move) -> Self {
        debug_assert!(self.is_valid_move(mv));
        let mut cells = self.cells.clone();
        cells[mv.index()] = CellState::Claimed(self.current);

        let relatch = |statuses: &[LineStatus], orientation: Orientation| {
            statuses
                .iter()
                .enumerate()
                .map(|(k, &status)| {
                    let line = leyline::line_cells(orientation, self.layout, k);
                    leyline::evaluate_capture(&cells, &line, status)
                })
                .collect()
        };

        let left = relatch(&self.left, Orientation::Left);
        let right = relatch(&self.right, Orientation::Right);
        let up = relatch(&self.up, Orientation::Up);

        Self {
            layout: self.layout,
            current: self.current.opponent(),
            cells,
            left,
            right,
            up,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
