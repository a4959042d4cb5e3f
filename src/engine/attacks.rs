//! Check, checkmate, and stalemate detection.
//!
//! `is_in_check` deliberately scans *pseudo-legal* enemy moves: whether an
//! attacking piece is itself pinned does not matter for whether the king
//! square is attacked, and using the unfiltered generator keeps this module
//! and the legality filter from calling into each other forever.

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{Color, PieceType, Square};

/// Locate the king of the given colour. `None` on king-less boards, which
/// test positions are allowed to be.
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces()
        .find(|(_, p)| p.kind == PieceType::King && p.color == color)
        .map(|(sq, _)| sq)
}

/// Is `color`'s king currently attacked?
///
/// A board with no king of that colour is reported as not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = find_king(board, color) else {
        return false;
    };

    board
        .pieces()
        .filter(|(_, p)| p.color != color)
        .any(|(sq, _)| movegen::pseudo_legal_moves(board, sq).contains(&king_sq))
}

/// Would playing `from -> to` leave `color`'s king attacked? Simulated on a
/// scratch copy; the real board is untouched.
pub fn leaves_king_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let mut scratch = board.clone();
    scratch.move_piece(from, to);
    is_in_check(&scratch, color)
}

/// Checkmate: in check with no legal move anywhere.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_any_legal_move(board, color)
}

/// Stalemate: not in check, yet no legal move anywhere.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_any_legal_move(board, color)
}

fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(sq, _)| !movegen::legal_moves(board, sq).is_empty())
}
