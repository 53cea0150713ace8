//! A single board square and its optional occupant.

use crate::board::board_utils::Square;
use crate::board::piece::Piece;

/// Fixed shade of a tile, from the parity of `row + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    square: Square,
    piece: Option<Piece>,
}

impl Tile {
    pub const fn empty(square: Square) -> Self {
        Self {
            square,
            piece: None,
        }
    }

    pub const fn occupied(square: Square, piece: Piece) -> Self {
        Self {
            square,
            piece: Some(piece),
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    /// `a8` (row 0, column 0) is a light square.
    #[inline]
    pub const fn color(&self) -> TileColor {
        if (self.square.row() + self.square.col()) % 2 == 0 {
            TileColor::Light
        } else {
            TileColor::Dark
        }
    }

    pub(crate) fn set(&mut self, piece: Option<Piece>) {
        self.piece = piece;
    }

    pub(crate) fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
