//! Outcome of a position: still going, check, mate or one of the draws.

use std::fmt;

use crate::board::board::Board;
use crate::board::board_utils::Color;
use crate::player::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given side is in check and has a way out.
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw(_)
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::InsufficientMaterial => f.write_str("insufficient material"),
            DrawReason::FiftyMoveRule => f.write_str("fifty-move rule"),
            DrawReason::ThreefoldRepetition => f.write_str("threefold repetition"),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

/// Neither side can deliver mate.
///
/// Covers a bare king against a bare king, a lone knight or a lone bishop,
/// and lone bishops on both sides standing on the same shade.
pub fn is_insufficient_material(board: &Board, white: &Player, black: &Player) -> bool {
    let at_most_minor =
        |p: &Player| p.has_bare_king() || p.has_king_and_knight() || p.has_king_and_bishop();

    if white.has_bare_king() && at_most_minor(black) {
        return true;
    }
    if black.has_bare_king() && at_most_minor(white) {
        return true;
    }
    match (
        white.lone_bishop_tile_color(board),
        black.lone_bishop_tile_color(board),
    ) {
        (Some(w), Some(b)) => w == b,
        _ => false,
    }
}
