//! Move-selection strategies
//!
//! Three strategies over the same move enumeration and transition:
//! exact recursive negamax, an iterative work-stack equivalent, and a
//! bounded two-ply heuristic. All are deterministic; when several moves
//! share the best value, the first one in board enumeration order (the
//! lowest cell index) is chosen.

use rustc_hash::FxHashMap;

use crate::game::{GameState, Move};

/// Score of a lost position for the player to move
const LOSS: i8 = -1;

// ============================================================================
// EXACT SEARCH - RECURSIVE
// ============================================================================

/// Exact game value of `state` for the player to move: -1 when no moves
/// remain (the mover has lost), otherwise the best negated child value.
///
/// Full-tree backward induction with no pruning or memoization; cost is
/// exponential in the number of unclaimed cells, and recursion depth is
/// bounded by the cell count.
pub fn negamax_value(state: &GameState) -> i8 {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return LOSS;
    }
    let mut best = LOSS;
    for mv in moves {
        best = best.max(-negamax_value(&state.apply(mv)));
    }
    best
}

/// Choose a move by exact recursive search.
///
/// Returns `None` on an already-terminal state.
pub fn choose_move_exact(state: &GameState) -> Option<Move> {
    pick_best(state, |child| -negamax_value(child))
}

// ============================================================================
// EXACT SEARCH - ITERATIVE
// ============================================================================

/// Exact game value computed without call-stack recursion.
///
/// Post-order evaluation over an explicit worklist of (state, expanded?)
/// frames: a freshly popped node is expanded and re-pushed behind its
/// children; a node popped the second time folds `-max` over the child
/// values already in the memo. Agrees with [`negamax_value`] on every
/// reachable state.
pub fn iterative_value(state: &GameState) -> i8 {
    let mut memo = FxHashMap::default();
    evaluate_iterative(&mut memo, state)
}

fn evaluate_iterative(memo: &mut FxHashMap<GameState, i8>, root: &GameState) -> i8 {
    let mut stack: Vec<(GameState, bool)> = vec![(root.clone(), false)];
    while let Some((state, expanded)) = stack.pop() {
        if memo.contains_key(&state) {
            continue;
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            memo.insert(state, LOSS);
            continue;
        }
        if expanded {
            let mut best = LOSS;
            for mv in &moves {
                let child = state.apply(*mv);
                let value = memo
                    .get(&child)
                    .copied()
                    .expect("children evaluated before parent");
                best = best.max(-value);
            }
            memo.insert(state, best);
        } else {
            stack.push((state.clone(), true));
            for mv in moves {
                let child = state.apply(mv);
                if !memo.contains_key(&child) {
                    stack.push((child, false));
                }
            }
        }
    }
    memo.get(root)
        .copied()
        .expect("root evaluated by the worklist")
}

/// Choose a move by exact iterative search. Returns `None` on an
/// already-terminal state.
pub fn choose_move_iterative(state: &GameState) -> Option<Move> {
    let mut memo = FxHashMap::default();
    pick_best(state, |child| -evaluate_iterative(&mut memo, child))
}

// ============================================================================
// BOUNDED-LOOKAHEAD HEURISTIC
// ============================================================================

/// Cheap two-ply approximation of the exact value.
///
/// Looks at most two states ahead: +1 when some move ends the game at
/// once, -1 when the mover has no moves or every move lets the opponent
/// end the game on the reply, 0 otherwise. Weaker than the exact search
/// and never to be confused with it.
pub fn rough_outcome(state: &GameState) -> i8 {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return LOSS;
    }
    let children: Vec<GameState> = moves.iter().map(|&mv| state.apply(mv)).collect();
    if children.iter().any(|c| c.legal_moves().is_empty()) {
        return 1;
    }
    let all_replies_lose = children.iter().all(|child| {
        child
            .legal_moves()
            .into_iter()
            .any(|mv| child.apply(mv).legal_moves().is_empty())
    });
    if all_replies_lose {
        LOSS
    } else {
        0
    }
}

/// Choose the move whose child has the lowest rough outcome for the
/// opponent. Returns `None` on an already-terminal state.
pub fn choose_move_heuristic(state: &GameState) -> Option<Move> {
    pick_best(state, |child| -rough_outcome(child))
}

// ============================================================================
// SELECTION
// ============================================================================

/// Evaluate each child and keep the first maximal move in board order
fn pick_best<F>(state: &GameState, mut score: F) -> Option<Move>
where
    F: FnMut(&GameState) -> i8,
{
    let mut best: Option<(Move, i8)> = None;
    for mv in state.legal_moves() {
        let value = score(&state.apply(mv));
        match best {
            Some((_, b)) if value <= b => {}
            _ => best = Some((mv, value)),
        }
    }
    best.map(|(mv, _)| mv)
}

// ============================================================================
// TESTS
// ============================================================================
