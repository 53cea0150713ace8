//! Canonical chess-rule constants.
//!
//! Starting layout, castling geometry and draw thresholds shared by the
//! board, move generation and the game record.

use crate::board::board_utils::{Color, Square};
use crate::board::piece::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank order from file `a` to file `h`.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position that draw the game.
pub const REPETITION_LIMIT: u32 = 3;

/// Which wing a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    pub const fn rook_start_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_COL,
        }
    }

    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Columns strictly between king and rook, which must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    /// Columns the king passes through or lands on, which must be safe.
    #[inline]
    pub const fn king_path_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[3, 2],
        }
    }
}

#[inline]
pub const fn king_start_square(color: Color) -> Square {
    Square::at(color.back_rank(), KING_START_COL)
}

#[inline]
pub const fn rook_start_square(color: Color, side: CastleSide) -> Square {
    Square::at(color.back_rank(), side.rook_start_col())
}
