use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::move_generation::legal_move_shared::{spectrum_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(board: &Board, knight: &Piece, out: &mut Vec<Move>) {
    spectrum_moves(board, knight, &KNIGHT_OFFSETS, out);
}
