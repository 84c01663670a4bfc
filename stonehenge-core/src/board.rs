//! Triangular board geometry and cell labels

use serde::{Deserialize, Serialize};

use crate::game::GameError;

/// Board layout for a given side length.
///
/// Rows are sized 2, 3, ..., side+1 top to bottom, followed by a final
/// anchor row of size `side`. Cells are numbered row-major from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardLayout {
    side: usize,
}

impl BoardLayout {
    pub fn new(side: usize) -> Result<Self, GameError> {
        if side < 1 {
            return Err(GameError::InvalidSideLength(side));
        }
        Ok(Self { side })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of rows (side regular rows plus the anchor row)
    pub fn row_count(&self) -> usize {
        self.side + 1
    }

    /// Number of cells in row `r`
    pub fn row_len(&self, r: usize) -> usize {
        if r < self.side {
            r + 2
        } else {
            self.side
        }
    }

    /// Flat index of the first cell in row `r`
    pub fn row_start(&self, r: usize) -> usize {
        // Rows 0..r have sizes 2..r+1, so their total is r(r+3)/2
        if r <= self.side {
            r * (r + 3) / 2
        } else {
            self.total_cells()
        }
    }

    /// Total cell count: sum of (i+2) for i in 1..=side
    pub fn total_cells(&self) -> usize {
        self.side * (self.side + 5) / 2
    }

    /// Flat index of the cell at (row, col)
    pub fn cell_index(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.row_count() && c < self.row_len(r));
        self.row_start(r) + c
    }

    /// (row, col) of a flat cell index
    pub fn cell_pos(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.total_cells());
        let mut r = 0;
        while self.row_start(r + 1) <= index {
            r += 1;
        }
        (r, index - self.row_start(r))
    }
}

/// Label for a flat cell index: bijective base-26 (A..Z, AA, AB, ...)
pub fn label_of(index: usize) -> String {
    let mut n = index + 1;
    let mut buf = Vec::new();
    while n > 0 {
        n -= 1;
        buf.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

/// Flat cell index for a label. `None` if the label is not uppercase
/// alphabetic or does not fit in a `usize`.
pub fn index_of_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for ch in label.chars() {
        if !ch.is_ascii_uppercase() {
            return None;
        }
        let digit = (ch as usize) - ('A' as usize) + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n - 1)
}
