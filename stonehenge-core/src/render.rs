//! ASCII board rendering
//!
//! A read-only projection of a [`GameState`]: one text row per board row
//! prefixed by its left ley-line marker, with up-line markers above the
//! board and right-line markers below. Unclaimed cells show their label,
//! unclaimed lines show `@`; anything claimed shows the owner's digit.

use std::fmt;

use crate::game::{CellState, GameState, Move};
use crate::leyline::{LineStatus, Orientation};

fn status_mark(status: LineStatus) -> String {
    match status {
        LineStatus::Unclaimed => "@".to_string(),
        LineStatus::Captured(p) => p.digit().to_string(),
    }
}

fn cell_mark(state: &GameState, index: usize) -> String {
    let mv = Move::from_index(index);
    match state.cell(mv) {
        Some(CellState::Claimed(p)) => p.digit().to_string(),
        _ => mv.label(),
    }
}

pub fn render(state: &GameState) -> String {
    let layout = state.layout();
    let mut out = String::new();

    let marks = |orientation: Orientation| {
        state
            .lines(orientation)
            .iter()
            .map(|&s| status_mark(s))
            .collect::<Vec<_>>()
            .join("   ")
    };

    out.push_str(&format!("  up:    {}\n", marks(Orientation::Up)));
    for r in 0..layout.row_count() {
        let start = layout.row_start(r);
        let cells = (start..start + layout.row_len(r))
            .map(|i| cell_mark(state, i))
            .collect::<Vec<_>>()
            .join(" - ");
        let indent = if r == layout.side() { "  " } else { "" };
        out.push_str(&format!(
            "  {}{} - {}\n",
            indent,
            status_mark(state.line_status(Orientation::Left, r)),
            cells
        ));
    }
    out.push_str(&format!("  right: {}\n", marks(Orientation::Right)));
    out
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse_move;

    #[test]
    fn test_render_fresh_board() {
        let state = GameState::new(2, true).unwrap();
        let text = render(&state);
        for label in ["A", "B", "C", "D", "E", "F", "G"] {
            assert!(text.contains(label), "missing cell {} in:\n{}", label, text);
        }
        assert!(text.contains("up:"));
        assert!(text.contains("right:"));
        assert!(text.contains('@'));
    }

    #[test]
    fn test_render_shows_claims() {
        let state = GameState::new(2, true).unwrap();
        let next = state.make_move(parse_move("A").unwrap()).unwrap();
        let text = render(&next);
        // Cell A and its captured lines now show P1's digit
        assert!(text.contains('1'));
        assert!(!text.contains("A -"));
    }

    #[test]
    fn test_display_matches_render() {
        let state = GameState::new(1, true).unwrap();
        assert_eq!(state.to_string(), render(&state));
    }
}
