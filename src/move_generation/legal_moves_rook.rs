use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::move_generation::legal_move_shared::{sliding_moves, ORTHOGONALS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(board: &Board, rook: &Piece, out: &mut Vec<Move>) {
    sliding_moves(board, rook, &ORTHOGONALS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_utils::Square;

    #[test]
    fn open_rook_covers_fourteen_squares() {
        let board = Board::from_fen("7k/8/8/8/3R4/8/8/K7 w - - 0 1").expect("valid fen");
        let rook = *board
            .piece_at(Square::from_algebraic("d4").expect("square"))
            .expect("rook");
        let mut moves = Vec::new();
        generate_rook_moves(&board, &rook, &mut moves);
        assert_eq!(moves.len(), 14);
    }
}
