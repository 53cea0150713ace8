//! Engine abstraction.
//!
//! A computer player picks a move for the side to move given the board and
//! both refreshed players. Different strategies sit behind one trait so the
//! console binary and the game loop can choose one at runtime.

use crate::board::board::Board;
use crate::board::board_utils::Color;
use crate::moves::chess_move::Move;
use crate::player::player::Player;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn choose_move(&mut self, board: &Board, white: &Player, black: &Player) -> EngineOutput;
}

/// The player whose turn it is on `board`.
pub fn side_to_move<'a>(board: &Board, white: &'a Player, black: &'a Player) -> &'a Player {
    match board.turn() {
        Color::White => white,
        Color::Black => black,
    }
}
