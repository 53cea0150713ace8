//! Algebraic move strings for the move-history display.
//!
//! - Regular: `Nf3`, `e4` (no letter for pawns)
//! - Attacking: `Nxc6`, or `fxe5` for pawns (origin file instead of a letter)
//! - Castling: `0-0` and `0-0-0`
//! - En passant: `fxe6e.p.`

use std::fmt;

use crate::board::chess_rules::CastleSide;
use crate::moves::chess_move::{Move, PromotionChoice};

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Regular { piece, to } => write!(f, "{}{}", piece.kind().icon(), to),
            Move::Attacking { piece, to, .. } => {
                if piece.is_pawn() {
                    write!(f, "{}x{}", piece.square().file_char(), to)
                } else {
                    write!(f, "{}x{}", piece.kind().icon(), to)
                }
            }
            Move::Castling { side, .. } => match side {
                CastleSide::Kingside => f.write_str("0-0"),
                CastleSide::Queenside => f.write_str("0-0-0"),
            },
            Move::EnPassant { piece, to, .. } => {
                write!(f, "{}x{}e.p.", piece.square().file_char(), to)
            }
        }
    }
}

/// Notation with the promotion suffix appended, e.g. `e8=Q` or `dxe1=N`.
pub fn notation_with_promotion(mv: &Move, promotion: Option<PromotionChoice>) -> String {
    match promotion {
        Some(choice) if mv.requires_promotion() => format!("{mv}={}", choice.kind().icon()),
        _ => mv.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_utils::{Color, Square};
    use crate::board::piece::{Piece, PieceKind};

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn quiet_moves() {
        let knight = Piece::new(PieceKind::Knight, Color::White, sq("g1"));
        assert_eq!(Move::Regular { piece: knight, to: sq("f3") }.to_string(), "Nf3");
        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("e2"));
        assert_eq!(Move::Regular { piece: pawn, to: sq("e4") }.to_string(), "e4");
    }

    #[test]
    fn captures() {
        let knight = Piece::new(PieceKind::Knight, Color::White, sq("d4"));
        let victim = Piece::new(PieceKind::Knight, Color::Black, sq("c6"));
        let mv = Move::Attacking { piece: knight, to: sq("c6"), victim };
        assert_eq!(mv.to_string(), "Nxc6");

        let pawn = Piece::new(PieceKind::Pawn, Color::Black, sq("f5"));
        let victim = Piece::new(PieceKind::Pawn, Color::White, sq("e4"));
        let mv = Move::Attacking { piece: pawn, to: sq("e4"), victim };
        assert_eq!(mv.to_string(), "fxe4");
    }

    #[test]
    fn castling_and_en_passant() {
        let king = Piece::new(PieceKind::King, Color::White, sq("e1"));
        let rook = Piece::new(PieceKind::Rook, Color::White, sq("h1"));
        let short = Move::Castling {
            king,
            to: sq("g1"),
            rook,
            rook_to: sq("f1"),
            side: CastleSide::Kingside,
        };
        assert_eq!(short.to_string(), "0-0");

        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("f5"));
        let victim = Piece::new(PieceKind::Pawn, Color::Black, sq("e5"));
        let ep = Move::EnPassant { piece: pawn, to: sq("e6"), victim };
        assert_eq!(ep.to_string(), "fxe6e.p.");
    }

    #[test]
    fn promotion_suffix_only_when_promoting() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("e7"));
        let mv = Move::Regular { piece: pawn, to: sq("e8") };
        assert_eq!(notation_with_promotion(&mv, Some(PromotionChoice::Knight)), "e8=N");

        let pawn = Piece::new(PieceKind::Pawn, Color::White, sq("e2"));
        let mv = Move::Regular { piece: pawn, to: sq("e3") };
        assert_eq!(notation_with_promotion(&mv, Some(PromotionChoice::Queen)), "e3");
    }
}
