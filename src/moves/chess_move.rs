//! The four move variants.
//!
//! Moves are immutable records created fresh by legal move generation. Each
//! one carries the moving piece as it stood before the move, the destination
//! and, for captures, the victim. A move only needs the board it was
//! generated on to produce the next board.

use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::board::chess_rules::CastleSide;
use crate::board::piece::{Piece, PieceKind};

/// Fieldless tag of a [`Move`], handy for matching and counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Regular,
    Attacking,
    Castling,
    EnPassant,
}

/// Piece a promoting pawn turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionChoice {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionChoice {
    /// Map a UI selection index (0 = queen, 1 = rook, 2 = bishop, 3 = knight).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PromotionChoice::Queen),
            1 => Some(PromotionChoice::Rook),
            2 => Some(PromotionChoice::Bishop),
            3 => Some(PromotionChoice::Knight),
            _ => None,
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Move {
    /// A quiet move to an empty square.
    Regular { piece: Piece, to: Square },
    /// A capture of the piece standing on the destination.
    Attacking { piece: Piece, to: Square, victim: Piece },
    /// King and rook swap sides; `king` and `rook` are pre-move values.
    Castling {
        king: Piece,
        to: Square,
        rook: Piece,
        rook_to: Square,
        side: CastleSide,
    },
    /// Pawn capture onto the empty square the victim skipped over.
    EnPassant { piece: Piece, to: Square, victim: Piece },
}

impl Move {
    #[inline]
    pub const fn kind(&self) -> MoveKind {
        match self {
            Move::Regular { .. } => MoveKind::Regular,
            Move::Attacking { .. } => MoveKind::Attacking,
            Move::Castling { .. } => MoveKind::Castling,
            Move::EnPassant { .. } => MoveKind::EnPassant,
        }
    }

    /// The moving piece as it stood before the move.
    #[inline]
    pub const fn piece(&self) -> &Piece {
        match self {
            Move::Regular { piece, .. }
            | Move::Attacking { piece, .. }
            | Move::EnPassant { piece, .. } => piece,
            Move::Castling { king, .. } => king,
        }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.piece().square()
    }

    #[inline]
    pub const fn to(&self) -> Square {
        match self {
            Move::Regular { to, .. }
            | Move::Attacking { to, .. }
            | Move::Castling { to, .. }
            | Move::EnPassant { to, .. } => *to,
        }
    }

    #[inline]
    pub const fn victim(&self) -> Option<&Piece> {
        match self {
            Move::Attacking { victim, .. } | Move::EnPassant { victim, .. } => Some(victim),
            Move::Regular { .. } | Move::Castling { .. } => None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.victim().is_some()
    }

    #[inline]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        match self {
            Move::Castling { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// True when a pawn lands on its last rank and must be replaced.
    pub fn requires_promotion(&self) -> bool {
        let piece = self.piece();
        piece.is_pawn() && self.to().row() == piece.color().promotion_rank()
    }

    /// True for a pawn's two-square opening advance.
    pub fn is_double_pawn_push(&self) -> bool {
        matches!(self, Move::Regular { piece, to } if piece.is_pawn()
            && (piece.square().row() as i32 - to.row() as i32).abs() == 2)
    }

    /// The board after this move, without resolving a promotion.
    pub fn apply(&self, board: &Board) -> Board {
        board.apply_move(self)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.piece() == other.piece()
            && self.from() == other.from()
            && self.to() == other.to()
    }
}

impl Eq for Move {}
