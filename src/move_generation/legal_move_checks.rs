//! King safety and castling eligibility.
//!
//! `is_king_safe` is the single source of truth for check, checkmate,
//! stalemate and castling-through-check. It walks every enemy piece's raw
//! attack pattern (no self-check filtering, no castling) and tests whether
//! the target square is covered. The defending king never blocks a ray, so a
//! king stepping away along a line of attack is still seen as attacked.

use crate::board::board::Board;
use crate::board::board_utils::{Color, Square};
use crate::board::chess_rules::{king_start_square, rook_start_square, CastleSide};
use crate::board::piece::{Piece, PieceKind};
use crate::move_generation::legal_move_shared::{
    ALL_DIRECTIONS, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS,
};
use crate::move_generation::legal_moves_pawn::pawn_attack_squares;
use crate::moves::chess_move::Move;

/// False iff some enemy of `color` attacks `square`.
pub fn is_king_safe(board: &Board, square: Square, color: Color) -> bool {
    !board
        .pieces(color.opposite())
        .any(|attacker| attacks_square(board, attacker, square, color))
}

/// True when `color`'s king currently stands on an attacked square.
///
/// A side without a king is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .king(color)
        .is_some_and(|king| !is_king_safe(board, king.square(), color))
}

/// Whether `attacker` covers `target` with its raw attack pattern.
pub fn attacks_square(board: &Board, attacker: &Piece, target: Square, defender: Color) -> bool {
    let from = attacker.square();
    match attacker.kind() {
        PieceKind::Pawn => pawn_attack_squares(attacker).any(|sq| sq == target),
        PieceKind::Knight => offset_hits(from, &KNIGHT_OFFSETS, target),
        PieceKind::King => offset_hits(from, &KING_OFFSETS, target),
        PieceKind::Bishop => ray_hits(board, from, &DIAGONALS, target, defender),
        PieceKind::Rook => ray_hits(board, from, &ORTHOGONALS, target, defender),
        PieceKind::Queen => ray_hits(board, from, &ALL_DIRECTIONS, target, defender),
    }
}

/// Every square `attacker` covers, for diagnostics and tests.
pub fn attacked_squares(board: &Board, attacker: &Piece) -> Vec<Square> {
    let defender = attacker.color().opposite();
    Square::all()
        .filter(|sq| *sq != attacker.square() && attacks_square(board, attacker, *sq, defender))
        .collect()
}

fn offset_hits(from: Square, offsets: &[(i32, i32)], target: Square) -> bool {
    offsets
        .iter()
        .any(|&(d_row, d_col)| from.offset(d_row, d_col) == Some(target))
}

fn ray_hits(
    board: &Board,
    from: Square,
    directions: &[(i32, i32)],
    target: Square,
    defender: Color,
) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            if next == target {
                return true;
            }
            if let Some(blocker) = board.piece_at(next) {
                let transparent = blocker.is_king() && blocker.color() == defender;
                if !transparent {
                    break;
                }
            }
            cursor = next;
        }
    }
    false
}

pub fn can_kingside_castle_on_this_turn(board: &Board, color: Color) -> bool {
    can_castle_on_this_turn(board, color, CastleSide::Kingside)
}

pub fn can_queenside_castle_on_this_turn(board: &Board, color: Color) -> bool {
    can_castle_on_this_turn(board, color, CastleSide::Queenside)
}

/// Castling rules: king and rook unmoved on their starting squares, empty
/// squares between them, king not in check, and every square the king passes
/// through or lands on safe. The rook's own square may be attacked.
pub fn can_castle_on_this_turn(board: &Board, color: Color, side: CastleSide) -> bool {
    castling_pieces(board, color, side).is_some()
}

/// The castling move for `color` on `side`, if it is available.
pub fn castling_move(board: &Board, color: Color, side: CastleSide) -> Option<Move> {
    let (king, rook) = castling_pieces(board, color, side)?;
    let row = color.back_rank();
    Some(Move::Castling {
        king,
        to: Square::at(row, side.king_target_col()),
        rook,
        rook_to: Square::at(row, side.rook_target_col()),
        side,
    })
}

fn castling_pieces(board: &Board, color: Color, side: CastleSide) -> Option<(Piece, Piece)> {
    let king_square = king_start_square(color);
    let king = board
        .piece_at(king_square)
        .filter(|p| p.is_king() && p.color() == color && !p.has_moved())?;
    let rook = board
        .piece_at(rook_start_square(color, side))
        .filter(|p| p.is_rook() && p.color() == color && !p.has_moved())?;

    let row = color.back_rank();
    let path_clear = side
        .between_cols()
        .iter()
        .all(|&col| board.is_empty(Square::at(row, col)));
    if !path_clear {
        return None;
    }

    if !is_king_safe(board, king_square, color) {
        return None;
    }

    let path_safe = side
        .king_path_cols()
        .iter()
        .all(|&col| is_king_safe(board, Square::at(row, col), color));
    if !path_safe {
        return None;
    }

    Some((*king, *rook))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn initial_position_is_quiet() {
        let b = Board::initial_position();
        assert!(!is_king_in_check(&b, Color::White));
        assert!(!is_king_in_check(&b, Color::Black));
        assert!(is_king_safe(&b, sq("e4"), Color::White));
        // f3 is covered by the g2/e2 pawns and the g1 knight, not by black.
        assert!(is_king_safe(&b, sq("f3"), Color::White));
        // f6 is covered by black's g8 knight.
        assert!(!is_king_safe(&b, sq("f6"), Color::White));
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let b = board("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1");
        assert!(!is_king_safe(&b, sq("c4"), Color::White));
        assert!(!is_king_safe(&b, sq("e4"), Color::White));
        assert!(is_king_safe(&b, sq("d4"), Color::White));
    }

    #[test]
    fn defending_king_does_not_block_rays() {
        // Rook a1 checks the king on d1; e1 behind the king is still covered.
        let b = board("4k3/8/8/8/8/8/8/r2K4 w - - 0 1");
        assert!(is_king_in_check(&b, Color::White));
        assert!(!is_king_safe(&b, sq("e1"), Color::White));
        assert!(is_king_safe(&b, sq("e2"), Color::White));
    }

    #[test]
    fn other_pieces_block_rays() {
        let b = board("4k3/8/8/8/8/8/8/r1N1K3 w - - 0 1");
        assert!(!is_king_in_check(&b, Color::White));
        assert!(!is_king_safe(&b, sq("b1"), Color::White));
    }

    #[test]
    fn kingside_castling_after_clearing_bishop_and_knight() {
        let b = board("rnbqkbnr/pppppppp/8/8/8/5NP1/PPPPPPBP/RNBQK2R w KQkq - 0 1");
        assert!(can_kingside_castle_on_this_turn(&b, Color::White));
        assert!(!can_queenside_castle_on_this_turn(&b, Color::White));
        let mv = castling_move(&b, Color::White, CastleSide::Kingside).expect("castle available");
        assert_eq!(mv.to(), sq("g1"));
    }

    #[test]
    fn castling_blocked_when_king_passes_through_attack() {
        // Black rook on f8 covers f1 via the open f-file.
        let b = board("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!can_kingside_castle_on_this_turn(&b, Color::White));
        // Same for the landing square.
        let b = board("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!can_kingside_castle_on_this_turn(&b, Color::White));
    }

    #[test]
    fn attacked_rook_square_does_not_block_castling() {
        let b = board("4k2r/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!is_king_safe(&b, sq("h1"), Color::White));
        assert!(can_kingside_castle_on_this_turn(&b, Color::White));
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        // b1 attacked, but the king only crosses d1 and c1.
        let b = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(can_queenside_castle_on_this_turn(&b, Color::White));
        // b1 occupied blocks it.
        let b = board("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(!can_queenside_castle_on_this_turn(&b, Color::White));
    }

    #[test]
    fn no_castling_out_of_check_or_after_moving() {
        let b = board("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!can_kingside_castle_on_this_turn(&b, Color::White));
        let b = board("4k3/8/8/8/8/8/8/4K2R w - - 0 1");
        assert!(!can_kingside_castle_on_this_turn(&b, Color::White));
    }

    #[test]
    fn knight_attack_pattern() {
        let b = board("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
        let knight = *b.piece_at(sq("d4")).expect("knight");
        assert_eq!(attacked_squares(&b, &knight).len(), 8);
    }
}
