//! Coordinate helpers shared by every other module.
//!
//! Squares are (row, column) pairs. Row 0 is Black's back rank and row 7 is
//! White's, so algebraic rank `8` maps to row 0 and rank `1` to row 7. Column 0
//! is file `a`.

use std::fmt;

use crate::errors::{ChessError, ChessResult};

pub const NUM_ROWS: i32 = 8;
pub const NUM_COLS: i32 = 8;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// The other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this side must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }

    /// Row on which a pawn of this side promotes.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Reverse a color.
#[inline]
pub fn reverse_color(color: Color) -> Color {
    color.opposite()
}

/// A square on the board. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, rejecting coordinates outside `0..=7`.
    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        if is_valid_coordinate(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::InvalidSquare { row, col })
        }
    }

    /// Const constructor for tables of known-good squares.
    ///
    /// Panics at compile time (in const context) if the coordinates are off
    /// the board.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square out of bounds");
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `(d_row, d_col)` away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Square> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if is_valid_coordinate(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// File letter `a..=h`.
    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col)
    }

    /// Rank digit `1..=8`.
    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'8' - self.row)
    }

    /// Parse algebraic notation such as `e4`.
    pub fn from_algebraic(text: &str) -> ChessResult<Self> {
        algebraic_to_square(text)
    }

    /// Algebraic notation such as `e4`.
    pub fn to_algebraic(self) -> String {
        square_to_algebraic(self)
    }

    /// Iterate over all 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// True when `(row, col)` addresses a square on the board.
#[inline]
pub fn is_valid_coordinate(row: i32, col: i32) -> bool {
    (0..NUM_ROWS).contains(&row) && (0..NUM_COLS).contains(&col)
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    Square::new((b'8' - rank) as i32, (file - b'a') as i32)
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", square.file_char(), square.rank_char())
}
