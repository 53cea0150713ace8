//! Perft: exhaustive legal-move tree counting.
//!
//! Used to validate move generation against published node counts. Pawn
//! moves onto the last rank are expanded into the four promotion choices so
//! totals match the standard tables.

use crate::board::board::Board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::{Move, MoveKind, PromotionChoice};

const PROMOTION_CHOICES: [PromotionChoice; 4] = [
    PromotionChoice::Queen,
    PromotionChoice::Rook,
    PromotionChoice::Bishop,
    PromotionChoice::Knight,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.legal_moves_for_color(board, board.turn()) {
        for (child, promoted) in expand(board, &mv) {
            if depth == 1 {
                total.merge(leaf_counts(&mv, &child, promoted));
            } else {
                total.merge(perft(generator, &child, depth - 1));
            }
        }
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    depth: u8,
) -> Vec<(String, usize)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in generator.legal_moves_for_color(board, board.turn()) {
        for (child, _) in expand(board, &mv) {
            out.push((
                format!("{}{}", mv.from(), mv.to()),
                perft(generator, &child, depth - 1).nodes,
            ));
        }
    }
    out
}

fn expand(board: &Board, mv: &Move) -> Vec<(Board, bool)> {
    if mv.requires_promotion() {
        PROMOTION_CHOICES
            .iter()
            .map(|choice| (board.apply_move_promoting(mv, *choice), true))
            .collect()
    } else {
        vec![(board.apply_move(mv), false)]
    }
}

fn leaf_counts(mv: &Move, child: &Board, promoted: bool) -> PerftCounts {
    PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        en_passant: usize::from(mv.kind() == MoveKind::EnPassant),
        castles: usize::from(mv.kind() == MoveKind::Castling),
        promotions: usize::from(promoted),
        checks: usize::from(is_king_in_check(child, child.turn())),
    }
}
