//! 8×8 mailbox board representation.
//!
//! `Board` is a plain grid of optional pieces and the single source of truth:
//! legal moves and check status are always recomputed from it on demand.
//! It is immutable by convention — the move executor clones it and returns a
//! new value rather than mutating in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::types::{Color, Piece, PieceType, Square};

/// Back-rank piece order, queenside to kingside, shared by both colours.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The board: row 0 is black's back rank, row 7 is white's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position: back ranks on rows 0 and 7, pawns on
    /// rows 1 and 6.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for col in 0..8i8 {
            board.set(Square::new(1, col), Piece::new(PieceType::Pawn, Color::Black));
            board.set(Square::new(6, col), Piece::new(PieceType::Pawn, Color::White));
            board.set(
                Square::new(0, col),
                Piece::new(BACK_RANK[col as usize], Color::Black),
            );
            board.set(
                Square::new(7, col),
                Piece::new(BACK_RANK[col as usize], Color::White),
            );
        }
        board
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// What piece (if any) is on a square? `None` for off-board coordinates.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Iterate over all occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|p| (sq, p))
            })
        })
    }

    /// Number of pieces of a given colour on the board.
    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    // -----------------------------------------------------------------------
    // Mutation (board setup and the move executor's scratch copies)
    // -----------------------------------------------------------------------

    /// Place a piece on a square. Off-board coordinates are ignored.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize] = Some(piece);
        }
    }

    /// Clear a square. Off-board coordinates are ignored.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize] = None;
        }
    }

    /// Reassign destination, clear origin. No legality check — this is the
    /// raw primitive under both the executor and the check simulator.
    #[inline]
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.piece_at(from) {
            self.set(to, piece);
            self.clear(from);
        }
    }
}

// ---------------------------------------------------------------------------
// Display (8-line text grid, rank 8 at top)
// ---------------------------------------------------------------------------

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8i8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8i8 {
                let ch = match self.piece_at(Square::new(row, col)) {
                    Some(p) => p.kind.to_char(p.color),
                    None => '.',
                };
                write!(f, "{ch}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
