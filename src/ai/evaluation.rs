//! Static position evaluation, in centipawns from a fixed side's view.
//!
//! Four additive terms: material balance, king advancement penalty, center
//! occupation, and terminal bonuses for check and mate. Positive favours
//! the side being scored.

use crate::engine::attacks;
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// Score for delivering checkmate. Dominates every positional term.
pub const MATE_SCORE: i32 = 100_000;

/// Bonus for having the opponent in check.
pub const CHECK_SCORE: i32 = 500;

/// Penalty per row the king has strayed from its back rank.
const KING_EXPOSURE_PER_ROW: i32 = 50;

/// Bonus per piece occupying one of the four center squares.
const CENTER_BONUS: i32 = 50;

/// Evaluate the board from `color`'s point of view.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let enemy = !color;
    let mut score = 0;

    score += material(board, color) - material(board, enemy);
    score += king_safety(board, color) - king_safety(board, enemy);
    score += center_control(board, color) - center_control(board, enemy);

    // Terminal terms. Mate outweighs check, which outweighs everything
    // positional.
    if attacks::is_checkmate(board, enemy) {
        score += MATE_SCORE;
    } else if attacks::is_in_check(board, enemy) {
        score += CHECK_SCORE;
    }
    if attacks::is_checkmate(board, color) {
        score -= MATE_SCORE;
    } else if attacks::is_in_check(board, color) {
        score -= CHECK_SCORE;
    }

    score
}

/// Sum of piece values for one side. Kings count zero.
fn material(board: &Board, color: Color) -> i32 {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .map(|(_, p)| p.kind.value())
        .sum()
}

/// Penalty for how far the king has wandered from its own back rank.
/// Returns zero or a negative value; zero when the king is missing.
fn king_safety(board: &Board, color: Color) -> i32 {
    match attacks::find_king(board, color) {
        Some(sq) => {
            let distance = (sq.row - color.back_row()).abs() as i32;
            -KING_EXPOSURE_PER_ROW * distance
        }
        None => 0,
    }
}

/// Bonus for pieces standing on the four central squares (d4, e4, d5, e5).
fn center_control(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for row in 3..=4 {
        for col in 3..=4 {
            if let Some(p) = board.piece_at(Square::new(row, col)) {
                if p.color == color {
                    score += CENTER_BONUS;
                }
            }
        }
    }
    score
}
