//! Move generation interface.
//!
//! Search, perft and the player aggregate depend on this trait rather than a
//! concrete generator so alternative generators (for example a cached one)
//! can be swapped in without touching them.

use crate::board::board::Board;
use crate::board::board_utils::Color;
use crate::board::piece::Piece;
use crate::moves::chess_move::Move;

pub trait MoveGenerator {
    /// Legal moves of one piece on `board` for the current turn.
    fn legal_moves_for_piece(&self, board: &Board, piece: &Piece) -> Vec<Move>;

    /// Legal moves of every piece of `color`.
    fn legal_moves_for_color(&self, board: &Board, color: Color) -> Vec<Move> {
        board
            .pieces(color)
            .flat_map(|piece| self.legal_moves_for_piece(board, piece))
            .collect()
    }
}
