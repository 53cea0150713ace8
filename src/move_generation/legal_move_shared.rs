//! Direction and offset tables plus the two walking strategies every piece
//! generator is built from.
//!
//! Sliding pieces walk a ray until they leave the board, hit a friend (stop)
//! or hit an enemy (capture, then stop). Spectrum pieces try a fixed set of
//! offsets once each.

use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::board::piece::Piece;
use crate::moves::chess_move::Move;

pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ORTHOGONALS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i32, i32); 8] = ALL_DIRECTIONS;

/// Regular or attacking move onto `to`, or `None` when a friend stands there.
#[inline]
pub fn step_move(board: &Board, piece: &Piece, to: Square) -> Option<Move> {
    match board.piece_at(to) {
        None => Some(Move::Regular { piece: *piece, to }),
        Some(target) if target.color() != piece.color() => Some(Move::Attacking {
            piece: *piece,
            to,
            victim: *target,
        }),
        Some(_) => None,
    }
}

pub fn sliding_moves(board: &Board, piece: &Piece, directions: &[(i32, i32)], out: &mut Vec<Move>) {
    for &(d_row, d_col) in directions {
        let mut cursor = piece.square();
        while let Some(to) = cursor.offset(d_row, d_col) {
            match step_move(board, piece, to) {
                Some(mv) => {
                    let blocked = mv.is_capture();
                    out.push(mv);
                    if blocked {
                        break;
                    }
                }
                None => break,
            }
            cursor = to;
        }
    }
}

pub fn spectrum_moves(board: &Board, piece: &Piece, offsets: &[(i32, i32)], out: &mut Vec<Move>) {
    for &(d_row, d_col) in offsets {
        if let Some(mv) = piece
            .square()
            .offset(d_row, d_col)
            .and_then(|to| step_move(board, piece, to))
        {
            out.push(mv);
        }
    }
}
