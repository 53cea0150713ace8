//! Pawn candidate moves.
//!
//! Forward steps never capture, diagonal steps only capture, and the two-step
//! advance is only available from the starting row through two empty
//! squares. Promotion is not handled here: a pawn move onto the last rank is
//! an ordinary candidate, and the board swaps the piece afterwards.

use crate::board::board::Board;
use crate::board::board_utils::Square;
use crate::board::piece::{Piece, PieceKind};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(board: &Board, pawn: &Piece, out: &mut Vec<Move>) {
    let color = pawn.color();
    let forward = color.forward();
    let from = pawn.square();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(Move::Regular {
                piece: *pawn,
                to: one_step,
            });

            if from.row() == color.pawn_rank() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::Regular {
                            piece: *pawn,
                            to: two_step,
                        });
                    }
                }
            }
        }
    }

    for to in pawn_attack_squares(pawn) {
        if let Some(target) = board.piece_at(to) {
            if target.color() != color {
                out.push(Move::Attacking {
                    piece: *pawn,
                    to,
                    victim: *target,
                });
            }
        }
    }

    generate_en_passant(board, pawn, out);
}

/// The two diagonal squares a pawn attacks, whatever stands there.
pub fn pawn_attack_squares(pawn: &Piece) -> impl Iterator<Item = Square> {
    let forward = pawn.color().forward();
    let from = pawn.square();
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}

fn generate_en_passant(board: &Board, pawn: &Piece, out: &mut Vec<Move>) {
    let color = pawn.color();
    if pawn.square().row() != color.en_passant_rank() {
        return;
    }
    let Some(target) = board.en_passant_target() else {
        return;
    };

    for d_col in [-1, 1] {
        let Some(beside) = pawn.square().offset(0, d_col) else {
            continue;
        };
        let Some(neighbour) = board.piece_at(beside) else {
            continue;
        };
        let enemy_pawn = Piece::new(PieceKind::Pawn, color.opposite(), beside);
        if *neighbour != enemy_pawn {
            continue;
        }
        let Some(to) = pawn.square().offset(color.forward(), d_col) else {
            continue;
        };
        if to == target && board.is_empty(to) {
            out.push(Move::EnPassant {
                piece: *pawn,
                to,
                victim: *neighbour,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::chess_move::MoveKind;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    fn moves_for(board: &Board, at: &str) -> Vec<Move> {
        let pawn = *board.piece_at(sq(at)).expect("pawn on square");
        let mut out = Vec::new();
        generate_pawn_moves(board, &pawn, &mut out);
        out
    }

    #[test]
    fn starting_pawn_has_one_and_two_steps() {
        let board = Board::initial_position();
        let moves = moves_for(&board, "e2");
        let targets: Vec<String> = moves.iter().map(|m| m.to().to_algebraic()).collect();
        assert_eq!(targets, vec!["e3", "e4"]);

        let moves = moves_for(&board, "d7");
        let targets: Vec<String> = moves.iter().map(|m| m.to().to_algebraic()).collect();
        assert_eq!(targets, vec!["d6", "d5"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("valid fen");
        assert!(moves_for(&board, "e2").is_empty());

        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("valid fen");
        assert_eq!(moves_for(&board, "e2").len(), 1);
    }

    #[test]
    fn diagonal_only_with_enemy() {
        let board = Board::from_fen("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1").expect("valid fen");
        let moves = moves_for(&board, "e2");
        let captures: Vec<&Move> = moves.iter().filter(|m| m.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), sq("d3"));
    }

    #[test]
    fn en_passant_needs_the_target_square() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("valid fen");
        let moves = moves_for(&board, "e5");
        let ep: Vec<&Move> = moves
            .iter()
            .filter(|m| m.kind() == MoveKind::EnPassant)
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to(), sq("d6"));
        assert_eq!(ep[0].victim().map(|v| v.square()), Some(sq("d5")));

        let stale = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").expect("valid fen");
        assert!(moves_for(&stale, "e5")
            .iter()
            .all(|m| m.kind() != MoveKind::EnPassant));
    }

    #[test]
    fn black_pawn_captures_en_passant_downwards() {
        let board = Board::from_fen("4k3/8/8/8/4Pp2/8/8/4K3 b - e3 0 1").expect("valid fen");
        let moves = moves_for(&board, "f4");
        assert!(moves
            .iter()
            .any(|m| m.kind() == MoveKind::EnPassant && m.to() == sq("e3")));
    }
}
