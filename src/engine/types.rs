use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Pawn push direction in row terms: white moves toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row a pawn of this colour starts on.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row this colour's pieces start on (its back rank).
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceType
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Material value in centipawns. The king carries no material value.
    pub fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 100,
            PieceType::Knight => 300,
            PieceType::Bishop => 300,
            PieceType::Rook => 500,
            PieceType::Queen => 900,
            PieceType::King => 0,
        }
    }

    /// Uppercase letter used on the board display ('P', 'N', 'B', 'R',
    /// 'Q', 'K').
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Uppercase first letter of the piece name, used in move notation.
    /// Knight and king both render as 'K' here.
    pub fn initial(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'K',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Board-display character: uppercase for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        match color {
            Color::White => self.letter(),
            Color::Black => self.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "pawn"),
            PieceType::Knight => write!(f, "knight"),
            PieceType::Bishop => write!(f, "bishop"),
            PieceType::Rook => write!(f, "rook"),
            PieceType::Queen => write!(f, "queen"),
            PieceType::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece on the board. Immutable value: replaced, never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub color: Color,
    /// Carried in the schema for future castling support; no rule reads it.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board coordinate. Row 0 is black's back rank, row 7 is white's.
///
/// Signed so offset arithmetic can wander off the board; `is_on_board`
/// is the single bounds check everything funnels through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Both coordinates in `[0, 8)`.
    #[inline]
    pub fn is_on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// The square displaced by `(d_row, d_col)`; may be off-board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Parse algebraic notation like "e4". Column 0 is file 'a'; row 0 is rank 8.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if col < 8 && rank < 8 {
            Some(Square::new(7 - rank as i8, col as i8))
        } else {
            None
        }
    }

    /// Render as algebraic notation like "e4". Off-board coordinates
    /// render as raw "(row,col)" so error messages never panic on them.
    pub fn to_algebraic(self) -> String {
        if !self.is_on_board() {
            return format!("({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'0' + (8 - self.row) as u8) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A record of a played transition, created by the move executor.
///
/// `promotion`, `is_castling`, and `is_en_passant` are part of the schema
/// but never produced by the generator; the rule set is standard chess
/// minus those three special moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it was before the move.
    pub piece: Piece,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<Piece>,
    /// Algebraic-like text, filled in by the notation formatter.
    pub notation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceType>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_castling: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_en_passant: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notation.is_empty() {
            write!(f, "{}{}", self.from, self.to)
        } else {
            write!(f, "{}", self.notation)
        }
    }
}

// ---------------------------------------------------------------------------
// GameStatus
// ---------------------------------------------------------------------------

/// Current status of a game, from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }

    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors surfaced by the session layer. The core engine itself
/// degrades to `None` / empty results instead of raising.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: String, to: String },

    #[error("game is already over: {0}")]
    GameOver(String),

    #[error("no legal moves available for {0}")]
    NoLegalMoves(Color),

    #[error("no moves to undo")]
    NothingToUndo,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn color_geometry() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.pawn_row(), 6);
        assert_eq!(Color::Black.pawn_row(), 1);
        assert_eq!(Color::White.back_row(), 7);
        assert_eq!(Color::Black.back_row(), 0);
    }

    #[test]
    fn piece_type_values() {
        assert_eq!(PieceType::Pawn.value(), 100);
        assert_eq!(PieceType::Knight.value(), 300);
        assert_eq!(PieceType::Bishop.value(), 300);
        assert_eq!(PieceType::Rook.value(), 500);
        assert_eq!(PieceType::Queen.value(), 900);
        assert_eq!(PieceType::King.value(), 0);
    }

    #[test]
    fn piece_type_letters() {
        assert_eq!(PieceType::Knight.letter(), 'N');
        assert_eq!(PieceType::King.letter(), 'K');
        assert_eq!(PieceType::Pawn.to_char(Color::White), 'P');
        assert_eq!(PieceType::Pawn.to_char(Color::Black), 'p');
    }

    #[test]
    fn piece_type_name_initials() {
        for kind in PieceType::ALL {
            let first = kind.to_string().chars().next().unwrap();
            assert_eq!(kind.initial(), first.to_ascii_uppercase());
        }
    }

    #[test]
    fn square_bounds() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(-1, 0).is_on_board());
        assert!(!Square::new(0, 8).is_on_board());
        assert!(!Square::new(8, 3).is_on_board());
    }

    #[test]
    fn square_offset() {
        let sq = Square::new(4, 4);
        assert_eq!(sq.offset(-2, 1), Square::new(2, 5));
        assert!(!Square::new(0, 0).offset(-1, 0).is_on_board());
    }

    #[test]
    fn square_from_algebraic() {
        // Row 0 is rank 8, so a8 = (0,0) and h1 = (7,7).
        assert_eq!(Square::from_algebraic("a8"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h1"), Some(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::new(4, 4)));
        assert_eq!(Square::from_algebraic("e2"), Some(Square::new(6, 4)));
    }

    #[test]
    fn square_from_algebraic_invalid() {
        assert_eq!(Square::from_algebraic(""), None);
        assert_eq!(Square::from_algebraic("e"), None);
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
    }

    #[test]
    fn off_board_square_renders_raw_coordinates() {
        assert_eq!(Square::new(0, -1).to_algebraic(), "(0,-1)");
        assert_eq!(Square::new(8, 3).to_algebraic(), "(8,3)");
        assert_eq!(Square::new(-2, 9).to_string(), "(-2,9)");
    }

    #[test]
    fn square_algebraic_round_trip() {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::new(row, col);
                assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
            }
        }
    }

    #[test]
    fn game_status_strings() {
        assert_eq!(GameStatus::Playing.as_str(), "playing");
        assert_eq!(GameStatus::Check.as_str(), "check");
        assert_eq!(GameStatus::Checkmate.as_str(), "checkmate");
        assert_eq!(GameStatus::Stalemate.as_str(), "stalemate");
    }

    #[test]
    fn game_status_is_game_over() {
        assert!(!GameStatus::Playing.is_game_over());
        assert!(!GameStatus::Check.is_game_over());
        assert!(GameStatus::Checkmate.is_game_over());
        assert!(GameStatus::Stalemate.is_game_over());
    }

    #[test]
    fn piece_serde_shape() {
        let p = Piece::new(PieceType::Knight, Color::Black);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "knight");
        assert_eq!(json["color"], "black");
        // has_moved is elided while false.
        assert!(json.get("has_moved").is_none());
    }

    #[test]
    fn move_display_falls_back_to_coords() {
        let mv = Move {
            from: Square::from_algebraic("e2").unwrap(),
            to: Square::from_algebraic("e4").unwrap(),
            piece: Piece::new(PieceType::Pawn, Color::White),
            captured: None,
            notation: String::new(),
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        };
        assert_eq!(mv.to_string(), "e2e4");
    }
}
