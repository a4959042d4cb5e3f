//! Move selectors.
//!
//! The `MoveSelector` trait is the seam between the game controller and
//! the opponent logic. Two implementations:
//!   - `RandomSelector` — uniform over all legal moves.
//!   - `GreedySelector` — one-ply lookahead over the evaluation, picking
//!     uniformly among the top three candidates so its play stays varied.

use rand::seq::SliceRandom;
use tracing::trace;

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{Color, Square};

use super::evaluation::evaluate;

/// How many of the best-scoring moves the greedy selector draws from.
const TOP_CANDIDATES: usize = 3;

// =========================================================================
// MoveSelector trait
// =========================================================================

/// A candidate move, origin and destination only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveChoice {
    pub from: Square,
    pub to: Square,
}

/// The selector interface: given a board and a side, propose a move.
pub trait MoveSelector: Send + Sync {
    /// Pick a move for `color`, or `None` when it has no legal moves.
    fn select_move(&self, board: &Board, color: Color) -> Option<MoveChoice>;

    /// Human-readable name for this selector.
    fn name(&self) -> &str;
}

/// Every legal (from, to) pair for one side.
fn all_legal_choices(board: &Board, color: Color) -> Vec<MoveChoice> {
    let mut choices = Vec::new();
    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for to in movegen::legal_moves(board, from) {
            choices.push(MoveChoice { from, to });
        }
    }
    choices
}

// =========================================================================
// RandomSelector
// =========================================================================

/// Picks a uniformly random legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&self, board: &Board, color: Color) -> Option<MoveChoice> {
        let choices = all_legal_choices(board, color);
        choices.choose(&mut rand::thread_rng()).copied()
    }

    fn name(&self) -> &str {
        "RandomSelector"
    }
}

// =========================================================================
// GreedySelector
// =========================================================================

/// One-ply lookahead: score every legal move by the resulting position's
/// evaluation and draw uniformly from the top three.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySelector;

impl GreedySelector {
    pub fn new() -> Self {
        GreedySelector
    }
}

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, color: Color) -> Option<MoveChoice> {
        let mut scored: Vec<(MoveChoice, i32)> = all_legal_choices(board, color)
            .into_iter()
            .filter_map(|choice| {
                movegen::apply_move(board, choice.from, choice.to)
                    .map(|(after, _)| (choice, evaluate(&after, color)))
            })
            .collect();

        if scored.is_empty() {
            return None;
        }

        // Stable sort keeps generation order among equal scores.
        scored.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
        scored.truncate(TOP_CANDIDATES);

        for (choice, score) in &scored {
            trace!(from = %choice.from, to = %choice.to, score, "candidate");
        }

        scored
            .choose(&mut rand::thread_rng())
            .map(|&(choice, _)| choice)
    }

    fn name(&self) -> &str {
        "GreedySelector"
    }
}
