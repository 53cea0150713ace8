use crate::board::board::Board;
use crate::board::piece::Piece;
use crate::move_generation::legal_move_shared::{sliding_moves, ALL_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(board: &Board, queen: &Piece, out: &mut Vec<Move>) {
    sliding_moves(board, queen, &ALL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_utils::Square;

    #[test]
    fn central_queen_on_empty_board() {
        let board = Board::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("valid fen");
        let queen = *board
            .piece_at(Square::from_algebraic("d4").expect("square"))
            .expect("queen");
        let mut moves = Vec::new();
        generate_queen_moves(&board, &queen, &mut moves);
        // 14 orthogonal + 13 diagonal
        assert_eq!(moves.len(), 27);
    }

    #[test]
    fn boxed_in_queen_has_no_moves() {
        let board = Board::initial_position();
        let queen = *board.piece_at(Square::at(7, 3)).expect("queen on d1");
        let mut moves = Vec::new();
        generate_queen_moves(&board, &queen, &mut moves);
        assert!(moves.is_empty());
    }
}
