use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::move_generation::legal_move_shared::{sliding_moves, DIAGONALS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(board: &Board, bishop: &Piece, out: &mut Vec<Move>) {
    sliding_moves(board, bishop, &DIAGONALS, out);
}
