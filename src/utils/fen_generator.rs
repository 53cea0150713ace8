//! Board-to-FEN serializer.
//!
//! Castling rights are derived from move counts: a right exists while the
//! king and the matching rook both stand unmoved on their starting squares.

use crate::board::board::Board;
use crate::board::board_utils::{Color, Square};
use crate::board::chess_rules::{king_start_square, rook_start_square, CastleSide};
use crate::move_generation::legal_move_generator::legal_moves_for_piece;
use crate::moves::chess_move::MoveKind;

pub fn generate_fen(board: &Board) -> String {
    format!(
        "{} {} {}",
        leading_fields(board, board.en_passant_target()),
        board.halfmove_clock(),
        board.fullmove_number()
    )
}

/// The first four FEN fields: placement, side to move, castling and
/// en-passant target. Two boards with the same key are the same position for
/// repetition purposes, so the en-passant target only counts when a legal
/// en-passant capture exists.
pub fn position_key(board: &Board) -> String {
    leading_fields(board, capturable_en_passant_target(board))
}

fn capturable_en_passant_target(board: &Board) -> Option<Square> {
    board.en_passant_target().filter(|_| {
        board
            .pieces(board.turn())
            .filter(|piece| piece.is_pawn())
            .flat_map(|pawn| legal_moves_for_piece(board, pawn))
            .any(|mv| mv.kind() == MoveKind::EnPassant)
    })
}

fn leading_fields(board: &Board, en_passant: Option<Square>) -> String {
    let side = match board.turn() {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = en_passant
        .map(|sq| sq.to_algebraic())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {}",
        placement_field(board),
        side,
        castling_field(board),
        en_passant
    )
}

fn placement_field(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for row in 0..8u8 {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match board.piece_at(Square::at(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn castling_field(board: &Board) -> String {
    let mut out = String::new();
    for (color, side, ch) in [
        (Color::White, CastleSide::Kingside, 'K'),
        (Color::White, CastleSide::Queenside, 'Q'),
        (Color::Black, CastleSide::Kingside, 'k'),
        (Color::Black, CastleSide::Queenside, 'q'),
    ] {
        if castling_right(board, color, side) {
            out.push(ch);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn castling_right(board: &Board, color: Color, side: CastleSide) -> bool {
    let king_ok = board
        .piece_at(king_start_square(color))
        .is_some_and(|p| p.is_king() && p.color() == color && !p.has_moved());
    let rook_ok = board
        .piece_at(rook_start_square(color, side))
        .is_some_and(|p| p.is_rook() && p.color() == color && !p.has_moved());
    king_ok && rook_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn initial_position_fen() {
        assert_eq!(generate_fen(&Board::initial_position()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_survives_parse_and_generate() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w Kq f6 0 3",
        ] {
            let board = Board::from_fen(fen).expect("test FEN should parse");
            assert_eq!(generate_fen(&board), fen);
        }
    }

    #[test]
    fn position_key_keeps_only_capturable_en_passant_targets() {
        let board = Board::initial_position();
        let pawn = *board.piece_at(Square::at(6, 4)).expect("e2 pawn");
        let after_e4 = board.apply_regular(&pawn, Square::at(4, 4));
        assert!(generate_fen(&after_e4).contains(" e3 "));
        assert!(position_key(&after_e4).ends_with(" b KQkq -"));

        let board = Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w Kq f6 0 3")
            .expect("valid fen");
        assert!(position_key(&board).ends_with(" w Kq f6"));
    }

    #[test]
    fn pinned_capturer_does_not_keep_the_en_passant_target() {
        // The e5 pawn is pinned to its king by the rook on e8.
        let board = Board::from_fen("4r1k1/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("valid fen");
        assert!(position_key(&board).ends_with(" w - -"));
    }

    #[test]
    fn king_move_drops_both_rights() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid fen");
        let king = *board.king(Color::White).expect("white king");
        let next = board.apply_regular(&king, Square::at(7, 3));
        assert_eq!(castling_field(&next), "kq");
    }
}
