//! Static evaluation.
//!
//! Search delegates leaf scoring to [`BoardScorer`] so heuristics can be
//! swapped without touching the search. Scorers return White's score minus
//! Black's; White maximises and Black minimises.

use crate::board::board::Board;
use crate::board::board_utils::Color;
use crate::config::EvalWeights;
use crate::player::player::Player;

pub trait BoardScorer {
    /// White-minus-Black score of `board`. `depth` is the number of plies
    /// the search still had left when it reached this position.
    fn score(&self, board: &Board, white: &Player, black: &Player, depth: u8) -> i32;
}

/// Material balance only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, _board: &Board, white: &Player, black: &Player, _depth: u8) -> i32 {
        white.material_value() - black.material_value()
    }
}

/// Material, mobility, check and mate bonuses and a castling bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer {
    weights: EvalWeights,
}

impl StandardScorer {
    pub const fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub const fn weights(&self) -> &EvalWeights {
        &self.weights
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board, white: &Player, black: &Player, depth: u8) -> i32 {
        evaluate_player(board, white, black, depth, &self.weights)
            - evaluate_player(board, black, white, depth, &self.weights)
    }
}

/// Score of `player` from its own point of view.
pub fn evaluate_player(
    board: &Board,
    player: &Player,
    opponent: &Player,
    depth: u8,
    weights: &EvalWeights,
) -> i32 {
    player.material_value()
        + mobility(player, weights)
        + check(opponent, weights)
        + checkmate(opponent, depth, weights)
        + castled(board, player.color(), weights)
}

#[inline]
fn mobility(player: &Player, weights: &EvalWeights) -> i32 {
    player.legal_move_count() as i32 * weights.mobility_weight
}

#[inline]
fn check(opponent: &Player, weights: &EvalWeights) -> i32 {
    if opponent.is_in_check() {
        weights.check_bonus
    } else {
        0
    }
}

#[inline]
fn checkmate(opponent: &Player, depth: u8, weights: &EvalWeights) -> i32 {
    if opponent.is_in_checkmate() {
        weights.checkmate_bonus + weights.depth_bonus * i32::from(depth)
    } else {
        0
    }
}

#[inline]
fn castled(board: &Board, color: Color, weights: &EvalWeights) -> i32 {
    if board.has_castled(color) {
        weights.castle_bonus
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(board: &Board) -> (Player, Player) {
        (
            Player::from_board(board, Color::White),
            Player::from_board(board, Color::Black),
        )
    }

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn start_position_is_balanced() {
        let b = Board::initial_position();
        let (white, black) = players(&b);
        assert_eq!(StandardScorer::default().score(&b, &white, &black, 0), 0);
        assert_eq!(MaterialScorer.score(&b, &white, &black, 0), 0);
    }

    #[test]
    fn material_scorer_is_white_minus_black() {
        let b = board("4k3/8/8/8/8/8/6rn/4KBQ1 w - - 0 1");
        let (white, black) = players(&b);
        // Queen + bishop against rook + knight.
        assert_eq!(MaterialScorer.score(&b, &white, &black, 0), 1230 - 800);
    }

    #[test]
    fn player_evaluation_adds_mobility_and_check() {
        let b = board("4k3/8/8/8/8/8/8/4R2K b - - 0 1");
        let (white, black) = players(&b);
        let weights = EvalWeights::default();
        let expected = white.material_value()
            + white.legal_move_count() as i32
            + weights.check_bonus;
        assert_eq!(evaluate_player(&b, &white, &black, 0, &weights), expected);
    }

    #[test]
    fn faster_mates_score_higher() {
        let b = board("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
        let (white, black) = players(&b);
        let scorer = StandardScorer::default();
        let shallow = scorer.score(&b, &white, &black, 0);
        let early = scorer.score(&b, &white, &black, 2);
        assert!(shallow > 10_000);
        assert_eq!(early - shallow, 200);
    }

    #[test]
    fn castling_earns_the_bonus() {
        let before = board("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let (white, _) = players(&before);
        let castle = white
            .legal_moves()
            .into_iter()
            .find(|mv| mv.castle_side().is_some())
            .expect("kingside castling is available");
        let after = before.apply_move(&castle);
        let weights = EvalWeights {
            mobility_weight: 0,
            ..EvalWeights::default()
        };
        let (white_after, black_after) = players(&after);
        let (white_before, black_before) = players(&before);
        assert_eq!(
            evaluate_player(&after, &white_after, &black_after, 0, &weights)
                - evaluate_player(&before, &white_before, &black_before, 0, &weights),
            weights.castle_bonus
        );
    }
}
