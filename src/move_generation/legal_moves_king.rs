use crate::board::board::Board;
use crate::board::chess_rules::{king_start_square, CastleSide};
use crate::board::piece::Piece;
use crate::move_generation::legal_move_checks::castling_move;
use crate::move_generation::legal_move_shared::{spectrum_moves, KING_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    spectrum_moves(board, king, &KING_OFFSETS, out);
    generate_castling_moves(board, king, out);
}

fn generate_castling_moves(board: &Board, king: &Piece, out: &mut Vec<Move>) {
    if king.has_moved() || king.square() != king_start_square(king.color()) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if let Some(mv) = castling_move(board, king.color(), side) {
            out.push(mv);
        }
    }
}
