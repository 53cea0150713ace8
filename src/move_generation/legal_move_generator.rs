//! Legal move generation pipeline.
//!
//! Per-piece candidate generation followed by self-check filtering: each
//! candidate is applied to a copy of the board and dropped if the mover's king
//! ends up attacked. Pins and "king may not walk into check" fall out of this
//! filter without special cases.

use tracing::trace;

use crate::board::board::Board;
use crate::board::board_utils::{Color, Square};
use crate::board::piece::{Piece, PieceKind};
use crate::errors::{ChessError, ChessResult, MoveRejection};
use crate::move_generation::legal_move_checks::is_king_safe;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn legal_moves_for_piece(&self, board: &Board, piece: &Piece) -> Vec<Move> {
        legal_moves_for_piece(board, piece)
    }
}

/// Candidate moves before the self-check filter.
pub fn pseudo_legal_moves_for_piece(board: &Board, piece: &Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(board, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(board, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, piece, &mut out),
        PieceKind::King => generate_king_moves(board, piece, &mut out),
    }
    out
}

pub fn legal_moves_for_piece(board: &Board, piece: &Piece) -> Vec<Move> {
    pseudo_legal_moves_for_piece(board, piece)
        .into_iter()
        .filter(|mv| {
            let safe = leaves_king_safe(board, mv);
            if !safe {
                trace!(%mv, "discarding candidate that leaves the king attacked");
            }
            safe
        })
        .collect()
}

/// All legal moves of `color` on `board`.
pub fn legal_moves_for_color(board: &Board, color: Color) -> Vec<Move> {
    LegalMoveGenerator.legal_moves_for_color(board, color)
}

/// Whether the mover's king is safe on the board `mv` produces.
pub fn leaves_king_safe(board: &Board, mv: &Move) -> bool {
    let color = mv.piece().color();
    let next = board.apply_move(mv);
    match next.king(color) {
        Some(king) => is_king_safe(&next, king.square(), color),
        None => true,
    }
}

/// Resolve a (source, destination) pair chosen by a user into a legal move
/// for the side to move, or explain why it is rejected.
pub fn resolve_move(board: &Board, from: Square, to: Square) -> ChessResult<Move> {
    let reject = |reason| ChessError::MoveRejected { from, to, reason };

    let piece = board
        .piece_at(from)
        .ok_or_else(|| reject(MoveRejection::NoPieceAtSource))?;
    if piece.color() != board.turn() {
        return Err(reject(MoveRejection::NotYourPiece));
    }
    if board
        .piece_at(to)
        .is_some_and(|target| target.color() == piece.color())
    {
        return Err(reject(MoveRejection::OccupiedByAlly));
    }

    let candidate = pseudo_legal_moves_for_piece(board, piece)
        .into_iter()
        .find(|mv| mv.to() == to)
        .ok_or_else(|| reject(MoveRejection::Unreachable))?;

    if leaves_king_safe(board, &candidate) {
        Ok(candidate)
    } else {
        Err(reject(MoveRejection::OwnKingUnsafe))
    }
}
