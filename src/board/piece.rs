//! Piece model.
//!
//! A `Piece` is a small value: kind, color, the square it stands on and how
//! many times it has moved. Pieces never change in place. Moving a piece
//! produces a new value through [`Piece::moved_to`], which is the only way
//! the move count grows.
//!
//! Equality is structural: two pieces are equal when they share a kind and a
//! color, regardless of where they stand or how often they moved.

use std::hash::{Hash, Hasher};

use crate::board::board_utils::{Color, Square};

/// Piece kind (color is stored separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Letter used in move notation. Pawns have none.
    #[inline]
    pub const fn icon(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    move_count: u32,
}

impl Piece {
    /// A piece that has not moved yet.
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            move_count: 0,
        }
    }

    /// A piece with a known move history, used when setting up positions.
    pub(crate) const fn with_move_count(
        kind: PieceKind,
        color: Color,
        square: Square,
        move_count: u32,
    ) -> Self {
        Self {
            kind,
            color,
            square,
            move_count,
        }
    }

    /// The same piece after moving to `square`.
    #[must_use]
    pub const fn moved_to(&self, square: Square) -> Self {
        Self {
            kind: self.kind,
            color: self.color,
            square,
            move_count: self.move_count + 1,
        }
    }

    /// A promoted piece of `kind` that replaces this pawn, keeping its history.
    #[must_use]
    pub(crate) const fn promoted_to(&self, kind: PieceKind) -> Self {
        Self {
            kind,
            color: self.color,
            square: self.square,
            move_count: self.move_count,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    #[inline]
    pub fn is_knight(&self) -> bool {
        self.kind == PieceKind::Knight
    }

    #[inline]
    pub fn is_bishop(&self) -> bool {
        self.kind == PieceKind::Bishop
    }

    #[inline]
    pub fn is_rook(&self) -> bool {
        self.kind == PieceKind::Rook
    }

    #[inline]
    pub fn is_queen(&self) -> bool {
        self.kind == PieceKind::Queen
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.color == other.color
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.color.hash(state);
    }
}
