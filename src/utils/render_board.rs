//! Terminal-oriented Unicode board renderer.
//!
//! Produces a labelled 8x8 grid for logs and the console binary. The
//! `orientation` color is drawn at the bottom.

use crate::board::board::Board;
use crate::board::board_utils::{Color, Square};
use crate::board::piece::{Piece, PieceKind};

pub fn render_board(board: &Board, orientation: Color) -> String {
    let (rows, cols): (Vec<u8>, Vec<u8>) = match orientation {
        Color::White => ((0..8).collect(), (0..8).collect()),
        Color::Black => ((0..8).rev().collect(), (0..8).rev().collect()),
    };

    let files: String = cols
        .iter()
        .map(|&c| char::from(b'a' + c).to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str("  ");
    out.push_str(&files);
    out.push('\n');

    for &row in &rows {
        let rank = Square::at(row, 0).rank_char();
        out.push(rank);
        out.push(' ');

        for (i, &col) in cols.iter().enumerate() {
            match board.piece_at(Square::at(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if i < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  ");
    out.push_str(&files);

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.color(), piece.kind()) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
