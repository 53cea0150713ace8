//! FEN-to-Board parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string. FEN carries no move
//! history, so move counts are inferred: kings and rooks covered by a
//! castling right count as unmoved, pawns on their starting row count as
//! unmoved, and every other king, rook or pawn is treated as having moved
//! once.

use crate::board::board::Board;
use crate::board::board_utils::{algebraic_to_square, Color, Square};
use crate::board::chess_rules::{king_start_square, rook_start_square, CastleSide};
use crate::board::piece::{Piece, PieceKind};
use crate::errors::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, Default)]
struct CastlingField {
    rights: [[bool; 2]; 2],
}

impl CastlingField {
    fn allows(&self, color: Color, side: CastleSide) -> bool {
        let side_index = match side {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        };
        self.rights[color.index()][side_index]
    }

    fn any(&self, color: Color) -> bool {
        self.rights[color.index()].iter().any(|r| *r)
    }
}

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let castling = parse_castling_rights(castling_part)?;

    let mut board = Board::empty(side_to_move);
    for (kind, color, square) in parse_placement(board_part)? {
        let move_count = inferred_move_count(kind, color, square, &castling);
        board.place(Piece::with_move_count(kind, color, square, move_count));
    }

    board.set_en_passant_target(parse_en_passant_square(en_passant_part)?);
    let halfmove = halfmove_part
        .parse::<u32>()
        .map_err(|_| invalid(&format!("halfmove clock {halfmove_part}")))?;
    let fullmove = fullmove_part
        .parse::<u32>()
        .map_err(|_| invalid(&format!("fullmove number {fullmove_part}")))?;
    board.set_counters(halfmove, fullmove.max(1));

    Ok(board)
}

fn invalid(message: &str) -> ChessError {
    ChessError::InvalidFen(message.to_owned())
}

fn parse_placement(board_part: &str) -> ChessResult<Vec<(PieceKind, Color, Square)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = Vec::with_capacity(32);
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid("rank has too many files"));
            }

            pieces.push((kind, color, Square::new(row as i32, col as i32)?));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(pieces)
}

fn inferred_move_count(kind: PieceKind, color: Color, square: Square, castling: &CastlingField) -> u32 {
    let unmoved = match kind {
        PieceKind::King => square == king_start_square(color) && castling.any(color),
        PieceKind::Rook => [CastleSide::Kingside, CastleSide::Queenside]
            .into_iter()
            .any(|side| square == rook_start_square(color, side) && castling.allows(color, side)),
        PieceKind::Pawn => square.row() == color.pawn_rank(),
        _ => true,
    };
    if unmoved {
        0
    } else {
        1
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side to move {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingField> {
    let mut field = CastlingField::default();
    if castling_part == "-" {
        return Ok(field);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => field.rights[Color::White.index()][0] = true,
            'Q' => field.rights[Color::White.index()][1] = true,
            'k' => field.rights[Color::Black.index()][0] = true,
            'q' => field.rights[Color::Black.index()][1] = true,
            _ => return Err(invalid(&format!("castling rights character {ch}"))),
        }
    }

    Ok(field)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("en-passant square {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
