//! Random-move engine.
//!
//! Picks uniformly among the legal moves. Used as a baseline opponent and in
//! self-play smoke tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::engines::engine_trait::{side_to_move, Engine, EngineOutput};
use crate::player::player::Player;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board, white: &Player, black: &Player) -> EngineOutput {
        let legal_moves = side_to_move(board, white, black).legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal_moves.len()));
        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_utils::Color;

    #[test]
    fn picks_a_legal_move() {
        let board = Board::initial_position();
        let white = Player::from_board(&board, Color::White);
        let black = Player::from_board(&board, Color::Black);
        let out = RandomEngine::seeded(7).choose_move(&board, &white, &black);
        let mv = out.best_move.expect("the start position has moves");
        assert!(white.legal_moves().contains(&mv));
        assert_eq!(out.info_lines, vec!["random_engine legal_moves 20".to_owned()]);
    }

    #[test]
    fn same_seed_same_choice() {
        let board = Board::initial_position();
        let white = Player::from_board(&board, Color::White);
        let black = Player::from_board(&board, Color::Black);
        let a = RandomEngine::seeded(42).choose_move(&board, &white, &black);
        let b = RandomEngine::seeded(42).choose_move(&board, &white, &black);
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn no_move_when_stalemated() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let white = Player::from_board(&board, Color::White);
        let black = Player::from_board(&board, Color::Black);
        assert!(RandomEngine::seeded(1)
            .choose_move(&board, &white, &black)
            .best_move
            .is_none());
    }
}
