//! One side's aggregate view of the board.
//!
//! A `Player` is derived, never tracked: [`Player::refresh`] rescans the
//! board to rebuild the active pieces, the king reference and every active
//! piece's legal moves for the current turn. The check, checkmate and
//! stalemate predicates read that cached state, so they are only meaningful
//! after a refresh against the current board.

use crate::board::board::Board;
use crate::board::board_utils::{Color, Square};
use crate::board::piece::{Piece, PieceKind};
use crate::board::tile::TileColor;
use crate::move_generation::legal_move_checks::is_king_safe;
use crate::move_generation::legal_move_generator::legal_moves_for_piece;
use crate::moves::chess_move::Move;

/// An active piece together with its legal moves for the current turn.
#[derive(Debug, Clone)]
pub struct ActivePiece {
    pub piece: Piece,
    pub legal_moves: Vec<Move>,
}

#[derive(Debug, Clone)]
pub struct Player {
    color: Color,
    king: Option<Piece>,
    active: Vec<ActivePiece>,
    captured: Vec<Piece>,
    king_safe: bool,
}

impl Player {
    /// An empty player; call [`Player::refresh`] before querying it.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            king: None,
            active: Vec::new(),
            captured: Vec::new(),
            king_safe: true,
        }
    }

    /// A player already refreshed against `board`.
    pub fn from_board(board: &Board, color: Color) -> Self {
        let mut player = Self::new(color);
        player.refresh(board);
        player
    }

    /// Rebuild active pieces, king and legal moves from `board`.
    ///
    /// Captured pieces are history, not board state, and are kept.
    pub fn refresh(&mut self, board: &Board) {
        self.king = board.king(self.color).copied();
        self.active = board
            .pieces(self.color)
            .map(|piece| ActivePiece {
                piece: *piece,
                legal_moves: legal_moves_for_piece(board, piece),
            })
            .collect();
        self.king_safe = self
            .king
            .map_or(true, |king| is_king_safe(board, king.square(), self.color));
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn king(&self) -> Option<&Piece> {
        self.king.as_ref()
    }

    pub fn active_pieces(&self) -> &[ActivePiece] {
        &self.active
    }

    /// Enemy pieces this side has taken.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    pub fn record_capture(&mut self, victim: Piece) {
        self.captured.push(victim);
    }

    /// Every legal move across all active pieces, in board-scan order.
    #[doc(alias = "ugly_moves")]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.active
            .iter()
            .flat_map(|active| active.legal_moves.iter().copied())
            .collect()
    }

    pub fn legal_move_count(&self) -> usize {
        self.active.iter().map(|active| active.legal_moves.len()).sum()
    }

    /// Legal moves of the piece standing on `square`.
    pub fn legal_moves_from(&self, square: Square) -> &[Move] {
        self.active
            .iter()
            .find(|active| active.piece.square() == square)
            .map(|active| active.legal_moves.as_slice())
            .unwrap_or(&[])
    }

    /// The legal move from `from` to `to`, if there is one.
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves_from(from)
            .iter()
            .find(|mv| mv.to() == to)
            .copied()
    }

    pub fn is_king_safe(&self) -> bool {
        self.king_safe
    }

    pub fn is_in_check(&self) -> bool {
        !self.king_safe && self.legal_move_count() > 0
    }

    pub fn is_in_checkmate(&self) -> bool {
        !self.king_safe && self.legal_move_count() == 0
    }

    pub fn is_in_stalemate(&self) -> bool {
        self.king_safe && self.legal_move_count() == 0
    }

    /// Sum of the values of every active piece, king included.
    pub fn material_value(&self) -> i32 {
        self.active.iter().map(|active| active.piece.value()).sum()
    }

    pub fn has_bare_king(&self) -> bool {
        self.active.len() == 1 && self.king.is_some()
    }

    pub fn has_king_and_knight(&self) -> bool {
        self.has_king_and(PieceKind::Knight)
    }

    pub fn has_king_and_bishop(&self) -> bool {
        self.has_king_and(PieceKind::Bishop)
    }

    /// Shade of the tile the lone bishop stands on, for K+B vs K+B draws.
    pub fn lone_bishop_tile_color(&self, board: &Board) -> Option<TileColor> {
        if !self.has_king_and_bishop() {
            return None;
        }
        self.active
            .iter()
            .find(|active| active.piece.is_bishop())
            .map(|active| board.tile(active.piece.square()).color())
    }

    fn has_king_and(&self, kind: PieceKind) -> bool {
        self.active.len() == 2
            && self.king.is_some()
            && self.active.iter().any(|active| active.piece.kind() == kind)
    }
}
