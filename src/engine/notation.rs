//! Simplified algebraic notation for move records.
//!
//! Pawn moves render as the destination ("e4") or, when capturing, as the
//! origin file plus the destination ("exd5"). Every other piece renders as
//! the uppercase first letter of its name, an "x" when capturing, and the
//! destination ("Kf3" for a knight, "Rxd7"). No disambiguation and no
//! check or mate suffixes.

use crate::engine::types::{Move, PieceType};

/// Format a move record. Pure on the record: captures are read from
/// `mv.captured`, not from any board.
pub fn notation(mv: &Move) -> String {
    let dest = mv.to.to_algebraic();
    let is_capture = mv.captured.is_some();

    if mv.piece.kind == PieceType::Pawn {
        if is_capture {
            let file = (b'a' + mv.from.col as u8) as char;
            format!("{file}x{dest}")
        } else {
            dest
        }
    } else {
        let letter = mv.piece.kind.initial();
        if is_capture {
            format!("{letter}x{dest}")
        } else {
            format!("{letter}{dest}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Color, Piece, Square};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn mv(kind: PieceType, from: &str, to: &str, captured: Option<PieceType>) -> Move {
        Move {
            from: sq(from),
            to: sq(to),
            piece: Piece::new(kind, Color::White),
            captured: captured.map(|k| Piece::new(k, Color::Black)),
            notation: String::new(),
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    #[test]
    fn pawn_push_is_destination_only() {
        assert_eq!(notation(&mv(PieceType::Pawn, "e2", "e4", None)), "e4");
        assert_eq!(notation(&mv(PieceType::Pawn, "a7", "a6", None)), "a6");
    }

    #[test]
    fn pawn_capture_includes_origin_file() {
        assert_eq!(
            notation(&mv(PieceType::Pawn, "e4", "d5", Some(PieceType::Pawn))),
            "exd5"
        );
        assert_eq!(
            notation(&mv(PieceType::Pawn, "a4", "b5", Some(PieceType::Rook))),
            "axb5"
        );
    }

    #[test]
    fn piece_moves_use_name_initial() {
        assert_eq!(notation(&mv(PieceType::Bishop, "f1", "c4", None)), "Bc4");
        assert_eq!(notation(&mv(PieceType::Rook, "a1", "a3", None)), "Ra3");
        assert_eq!(notation(&mv(PieceType::Queen, "d1", "h5", None)), "Qh5");
        assert_eq!(notation(&mv(PieceType::King, "e1", "e2", None)), "Ke2");
    }

    #[test]
    fn knight_uses_first_letter_of_its_name() {
        // "knight" starts with 'k', so knights share "K" with the king.
        assert_eq!(notation(&mv(PieceType::Knight, "g1", "f3", None)), "Kf3");
        assert_eq!(
            notation(&mv(PieceType::Knight, "f6", "d5", Some(PieceType::Pawn))),
            "Kxd5"
        );
    }

    #[test]
    fn piece_captures_insert_x() {
        assert_eq!(
            notation(&mv(PieceType::Rook, "d4", "d7", Some(PieceType::Pawn))),
            "Rxd7"
        );
        assert_eq!(
            notation(&mv(PieceType::Queen, "h4", "e1", Some(PieceType::Knight))),
            "Qxe1"
        );
    }

    #[test]
    fn no_check_or_mate_suffixes() {
        let text = notation(&mv(PieceType::Queen, "d8", "h4", None));
        assert!(!text.contains('+'));
        assert!(!text.contains('#'));
    }
}
