//! Immutable board state.
//!
//! `Board` is an 8x8 grid of tiles plus the side to move, the en-passant
//! target and a few counters. Nothing here mutates `self`: every `apply_*`
//! method deep-copies the board and edits the copy, so search can explore
//! hypothetical futures while the game keeps its own board untouched.

use std::fmt;

use crate::board::board_utils::{Color, Square};
use crate::board::chess_rules::{BACK_RANK_LAYOUT, STARTING_POSITION_FEN};
use crate::board::piece::{Piece, PieceKind};
use crate::board::tile::Tile;
use crate::errors::{ChessError, ChessResult, MoveRejection};
use crate::moves::chess_move::{Move, PromotionChoice};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [[Tile; 8]; 8],
    turn: Color,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    castled: [bool; 2],
}

impl Board {
    /// An empty board with `turn` to move.
    pub fn empty(turn: Color) -> Self {
        let mut tiles = [[Tile::empty(Square::at(0, 0)); 8]; 8];
        for square in Square::all() {
            tiles[square.row() as usize][square.col() as usize] = Tile::empty(square);
        }
        Self {
            tiles,
            turn,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            castled: [false; 2],
        }
    }

    /// Standard starting layout, White to move, every castling right open.
    pub fn initial_position() -> Self {
        let mut board = Self::empty(Color::White);
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let square = Square::at(color.back_rank(), col as u8);
                board.place(Piece::new(*kind, color, square));
            }
            for col in 0..8u8 {
                let square = Square::at(color.pawn_rank(), col);
                board.place(Piece::new(PieceKind::Pawn, color, square));
            }
        }
        board
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// True when this board matches the standard start, FEN-wise.
    pub fn is_initial_position(&self) -> bool {
        self.to_fen() == STARTING_POSITION_FEN
    }

    #[inline]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.row() as usize][square.col() as usize]
    }

    /// Tile lookup from raw coordinates, rejecting anything off the board.
    pub fn tile_at(&self, row: i32, col: i32) -> ChessResult<&Tile> {
        Ok(self.tile(Square::new(row, col)?))
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tile(square).piece()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        !self.tile(square).is_occupied()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// True once `color` has castled on the way to this board.
    #[inline]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    /// All tiles, row 0 first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flat_map(|row| row.iter())
    }

    /// All pieces on the board.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.tiles().filter_map(Tile::piece)
    }

    /// Pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.all_pieces().filter(move |p| p.color() == color)
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces(color).find(|p| p.is_king())
    }

    /// Full structural clone. Boards hold only plain values, so the copy
    /// shares nothing with `self`.
    #[must_use]
    pub fn deep_copy(&self) -> Board {
        self.clone()
    }

    /// Dispatch to the `apply_*` method matching the move variant.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Board {
        match mv {
            Move::Regular { piece, to } => self.apply_regular(piece, *to),
            Move::Attacking { piece, to, victim } => self.apply_attack(piece, *to, victim),
            Move::Castling {
                king,
                to,
                rook,
                rook_to,
                ..
            } => self.apply_castle(king, *to, rook, *rook_to),
            Move::EnPassant { piece, to, victim } => self.apply_en_passant(piece, *to, victim),
        }
    }

    /// Apply a move and, if a pawn reached its last rank, promote it.
    #[must_use]
    pub fn apply_move_promoting(&self, mv: &Move, choice: PromotionChoice) -> Board {
        let next = self.apply_move(mv);
        if mv.requires_promotion() {
            next.promote_unchecked(mv.to(), choice.kind())
        } else {
            next
        }
    }

    /// Quiet move to an empty square.
    #[must_use]
    pub fn apply_regular(&self, piece: &Piece, to: Square) -> Board {
        let mut next = self.transition(piece, false);
        next.relocate(piece, to);
        if piece.is_pawn() && (piece.square().row() as i32 - to.row() as i32).abs() == 2 {
            let skipped = (piece.square().row() + to.row()) / 2;
            next.en_passant_target = Some(Square::at(skipped, to.col()));
        }
        next
    }

    /// Capture of the piece on `to`.
    #[must_use]
    pub fn apply_attack(&self, piece: &Piece, to: Square, victim: &Piece) -> Board {
        let mut next = self.transition(piece, true);
        next.tile_mut(victim.square()).set(None);
        next.relocate(piece, to);
        next
    }

    /// King and rook both relocate; the castled flag for the mover is set.
    #[must_use]
    pub fn apply_castle(&self, king: &Piece, to: Square, rook: &Piece, rook_to: Square) -> Board {
        let mut next = self.transition(king, false);
        next.relocate(king, to);
        next.relocate(rook, rook_to);
        next.castled[king.color().index()] = true;
        next
    }

    /// The victim is removed from its own square, not from `to`.
    #[must_use]
    pub fn apply_en_passant(&self, piece: &Piece, to: Square, victim: &Piece) -> Board {
        let mut next = self.transition(piece, true);
        next.tile_mut(victim.square()).set(None);
        next.relocate(piece, to);
        next
    }

    /// Replace the pawn on `square` with a new piece of `kind`.
    ///
    /// Turn, en-passant target and counters are left as the pawn move set
    /// them.
    pub fn apply_promotion(&self, square: Square, kind: PieceKind) -> ChessResult<Board> {
        let pawn = self.piece_at(square).ok_or(ChessError::EmptySquare(square))?;
        let promotable = pawn.is_pawn()
            && square.row() == pawn.color().promotion_rank()
            && !matches!(kind, PieceKind::Pawn | PieceKind::King);
        if !promotable {
            return Err(ChessError::MoveRejected {
                from: square,
                to: square,
                reason: MoveRejection::NotPromotable,
            });
        }
        Ok(self.promote_unchecked(square, kind))
    }

    fn promote_unchecked(&self, square: Square, kind: PieceKind) -> Board {
        let mut next = self.deep_copy();
        let tile = next.tile_mut(square);
        if let Some(pawn) = tile.take() {
            tile.set(Some(pawn.promoted_to(kind)));
        }
        next
    }

    /// Copy with the bookkeeping every move shares.
    fn transition(&self, mover: &Piece, capture: bool) -> Board {
        let mut next = self.deep_copy();
        next.turn = self.turn.opposite();
        next.en_passant_target = None;
        next.halfmove_clock = if mover.is_pawn() || capture {
            0
        } else {
            self.halfmove_clock + 1
        };
        if mover.color() == Color::Black {
            next.fullmove_number += 1;
        }
        next
    }

    fn relocate(&mut self, piece: &Piece, to: Square) {
        self.tile_mut(piece.square()).set(None);
        self.tile_mut(to).set(Some(piece.moved_to(to)));
    }

    #[inline]
    fn tile_mut(&mut self, square: Square) -> &mut Tile {
        &mut self.tiles[square.row() as usize][square.col() as usize]
    }

    // Set-up helpers used by the FEN parser and tests.

    pub(crate) fn place(&mut self, piece: Piece) {
        self.tile_mut(piece.square()).set(Some(piece));
    }

    pub(crate) fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub(crate) fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    pub(crate) fn set_counters(&mut self, halfmove_clock: u32, fullmove_number: u32) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self, Color::White))
    }
}
