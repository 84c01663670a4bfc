//! Ley-line membership and capture evaluation
//!
//! A board of side length n has n+1 ley-lines in each of three
//! orientations. Membership is computed in closed form from (row, col)
//! coordinates, so it holds for any side length. Within one orientation
//! every cell belongs to exactly one line.

use serde::{Deserialize, Serialize};

use crate::board::BoardLayout;
use crate::game::{CellState, Player};

/// Ley-line orientation family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Left,
    Right,
    Up,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [Orientation::Left, Orientation::Right, Orientation::Up];
}

/// Capture status of a ley-line. Transitions away from `Unclaimed`
/// exactly once and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStatus {
    Unclaimed,
    Captured(Player),
}

/// Number of ley-lines per orientation
pub fn line_count(side: usize) -> usize {
    side + 1
}

/// Flat cell indices of line `k` in the given orientation.
///
/// With 0-based rows (row r < n holds columns 0..=r+1, the anchor row n
/// holds columns 0..n):
/// - Left line k is row k in full.
/// - Up line 0 is column 0 of rows 0..n; up line k >= 1 is column k of
///   rows k-1..n plus cell (n, k-1).
/// - Right line 0 is the last cell of rows 0..n; right line k >= 1 is
///   the diagonal (r, r+1-k) for rows k-1..n plus cell (n, n-k).
pub fn line_cells(orientation: Orientation, layout: BoardLayout, k: usize) -> Vec<usize> {
    let n = layout.side();
    debug_assert!(k <= n);
    match orientation {
        Orientation::Left => {
            let start = layout.row_start(k);
            (start..start + layout.row_len(k)).collect()
        }
        Orientation::Up => {
            if k == 0 {
                (0..n).map(|r| layout.cell_index(r, 0)).collect()
            } else {
                let mut cells: Vec<usize> =
                    (k - 1..n).map(|r| layout.cell_index(r, k)).collect();
                cells.push(layout.cell_index(n, k - 1));
                cells
            }
        }
        Orientation::Right => {
            if k == 0 {
                (0..n).map(|r| layout.cell_index(r, r + 1)).collect()
            } else {
                let mut cells: Vec<usize> =
                    (k - 1..n).map(|r| layout.cell_index(r, r + 1 - k)).collect();
                cells.push(layout.cell_index(n, n - k));
                cells
            }
        }
    }
}

/// All lines of one orientation, ordered by line index
pub fn lines_for(orientation: Orientation, layout: BoardLayout) -> Vec<Vec<usize>> {
    (0..line_count(layout.side()))
        .map(|k| line_cells(orientation, layout, k))
        .collect()
}

/// Latch a line's capture status against the current board.
///
/// Pure and idempotent for a fixed board: once a status is captured it is
/// returned unchanged, otherwise a player owning at least half the line's
/// cells captures it. Player 1 is checked first, matching the rules'
/// resolution when an even line splits exactly in half.
pub fn evaluate_capture(cells: &[CellState], line: &[usize], current: LineStatus) -> LineStatus {
    if current != LineStatus::Unclaimed {
        return current;
    }
    let mut p1 = 0;
    let mut p2 = 0;
    for &i in line {
        match cells[i] {
            CellState::Claimed(Player::P1) => p1 += 1,
            CellState::Claimed(Player::P2) => p2 += 1,
            CellState::Unclaimed => {}
        }
    }
    if 2 * p1 >= line.len() {
        LineStatus::Captured(Player::P1)
    } else if 2 * p2 >= line.len() {
        LineStatus::Captured(Player::P2)
    } else {
        LineStatus::Unclaimed
    }
}
