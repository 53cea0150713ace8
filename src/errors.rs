//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by board construction,
//! parsing utilities, move resolution and configuration loading. Rules
//! violations are never reported from inside move generation: illegal
//! candidates are simply not produced. Errors only surface at the edges, when
//! a caller hands the core something it cannot accept (a square off the
//! board, a move the side to move does not have, a malformed FEN string).
//!
//! Usage guidelines:
//! - Input-shaped variants (`InvalidSquare`, `InvalidAlgebraic`, `InvalidFen`,
//!   `Config`) are recoverable and suitable for showing to a user.
//! - `MoveRejected` carries a [`MoveRejection`] reason code so a UI can
//!   re-prompt with a precise message.
//! - `GameOver` means the game record no longer accepts moves.

use std::fmt;

use crate::board::board_utils::Square;

/// Result alias used across the crate.
pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the chess engine.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// A (row, column) pair outside `0..=7` was used to address the board.
    #[error("square ({row}, {col}) is off the board")]
    InvalidSquare { row: i32, col: i32 },

    /// An algebraic square such as `e4` failed to parse.
    ///
    /// Payload: the offending input.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A FEN string had malformed structure or an unknown token.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The requested move is not in the legal move list of the side to move.
    #[error("move {from} -> {to} rejected: {reason}")]
    MoveRejected {
        from: Square,
        to: Square,
        reason: MoveRejection,
    },

    /// An operation expected a piece on the given square.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on the given square does not belong to the side to move.
    #[error("piece on {0} does not belong to the side to move")]
    WrongTurn(Square),

    /// The game has ended and accepts no further moves.
    #[error("the game is over")]
    GameOver,

    /// Engine configuration could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reason code attached to a rejected move selection.
///
/// These map one-to-one onto the messages a UI shows when it re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The source square is empty.
    NoPieceAtSource,
    /// The source square holds an enemy piece.
    NotYourPiece,
    /// The destination square holds a friendly piece.
    OccupiedByAlly,
    /// The piece cannot reach the destination at all.
    Unreachable,
    /// The move is reachable but would leave the mover's king attacked.
    OwnKingUnsafe,
    /// A promotion piece was supplied for a move that does not promote.
    NotPromotable,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveRejection::NoPieceAtSource => "there is no piece on the source square",
            MoveRejection::NotYourPiece => "that piece belongs to the opponent",
            MoveRejection::OccupiedByAlly => "the destination is occupied by an ally",
            MoveRejection::Unreachable => "the piece cannot move there",
            MoveRejection::OwnKingUnsafe => "the move would leave your king in check",
            MoveRejection::NotPromotable => "that move does not promote a pawn",
        };
        f.write_str(text)
    }
}
