//! Move generation and the move executor.
//!
//! Pipeline:
//!   1. Generate pseudo-legal destinations for the piece on the origin square
//!      (movement rules and occupancy only, king safety ignored).
//!   2. Filter: simulate each candidate on a scratch board and reject any
//!      that leaves the mover's own king attacked.
//!
//! The check test in step 2 goes through `attacks::is_in_check`, which only
//! ever calls back into the *pseudo-legal* generator — the filtered generator
//! never re-enters itself through the check path, so the two cannot recurse
//! into each other.

use crate::engine::attacks;
use crate::engine::board::Board;
use crate::engine::types::{Color, Move, PieceType, Square};

/// The four orthogonal sliding directions (rook).
const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The four diagonal sliding directions (bishop).
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight king offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =========================================================================
// Public API
// =========================================================================

/// All destinations the piece on `from` could move to by movement rules
/// alone, ignoring whether the mover's own king would be left in check.
/// Empty if `from` is empty or off-board.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = match piece.kind {
        PieceType::Pawn => pawn_moves(board, from, piece.color),
        PieceType::Knight => leaper_moves(board, from, piece.color, &KNIGHT_OFFSETS),
        PieceType::Bishop => slider_moves(board, from, piece.color, &DIAGONAL),
        PieceType::Rook => slider_moves(board, from, piece.color, &ORTHOGONAL),
        PieceType::Queen => {
            let mut m = slider_moves(board, from, piece.color, &ORTHOGONAL);
            m.extend(slider_moves(board, from, piece.color, &DIAGONAL));
            m
        }
        PieceType::King => leaper_moves(board, from, piece.color, &KING_OFFSETS),
    };

    // Final guard: every generator already bounds-checks, but keep the
    // contract independent of their internals.
    moves.retain(|sq| sq.is_on_board());
    moves
}

/// Pseudo-legal moves filtered by king safety: each candidate is simulated
/// on a scratch copy of the board and rejected if the mover's own colour is
/// left in check.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    pseudo_legal_moves(board, from)
        .into_iter()
        .filter(|&to| !attacks::leaves_king_in_check(board, from, to, piece.color))
        .collect()
}

/// Is `from -> to` a legal move on this board?
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    legal_moves(board, from).contains(&to)
}

/// Apply a legal move, producing a new board and the move record.
///
/// Returns `None` if the move is not legal. The input board is never
/// mutated, and the record's `notation` is left empty for the notation
/// formatter to fill in.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Option<(Board, Move)> {
    if !is_valid_move(board, from, to) {
        return None;
    }

    let piece = board.piece_at(from)?;
    let captured = board.piece_at(to);

    let mut new_board = board.clone();
    new_board.move_piece(from, to);

    let record = Move {
        from,
        to,
        piece,
        captured,
        notation: String::new(),
        promotion: None,
        is_castling: false,
        is_en_passant: false,
    };

    Some((new_board, record))
}

// =========================================================================
// Per-piece generators
// =========================================================================

fn pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let dir = color.forward();

    // Single push onto an empty square.
    let one_step = from.offset(dir, 0);
    if one_step.is_on_board() && board.piece_at(one_step).is_none() {
        moves.push(one_step);

        // Double push from the starting row; both squares must be empty.
        if from.row == color.pawn_row() {
            let two_steps = from.offset(2 * dir, 0);
            if two_steps.is_on_board() && board.piece_at(two_steps).is_none() {
                moves.push(two_steps);
            }
        }
    }

    // Diagonal captures, only onto enemy-occupied squares.
    for d_col in [-1, 1] {
        let target = from.offset(dir, d_col);
        if let Some(victim) = board.piece_at(target) {
            if victim.color != color {
                moves.push(target);
            }
        }
    }

    moves
}

/// Knight and king share the same shape: fixed offsets, destination must be
/// on-board and empty or enemy-occupied.
fn leaper_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in offsets {
        let target = from.offset(d_row, d_col);
        if !target.is_on_board() {
            continue;
        }
        match board.piece_at(target) {
            None => moves.push(target),
            Some(p) if p.color != color => moves.push(target),
            Some(_) => {}
        }
    }
    moves
}

/// Rook, bishop, and half of the queen: slide one square at a time until the
/// board edge or the first occupied square, which is included only when
/// enemy-occupied.
fn slider_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in directions {
        for step in 1..8 {
            let target = from.offset(step * d_row, step * d_col);
            if !target.is_on_board() {
                break;
            }
            match board.piece_at(target) {
                None => moves.push(target),
                Some(p) => {
                    if p.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
    moves
}

// =========================================================================
// Tests
// =========================================================================
