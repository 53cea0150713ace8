//! The authoritative game record.
//!
//! `Game` owns the current board and both players and is the only place a
//! board is replaced. A move is checked against the legal move list before it
//! is applied; afterwards both players are refreshed, the move text is
//! appended to the history, the position is counted for repetition and the
//! status is recomputed.

use std::collections::HashMap;

use tracing::info;

use crate::board::board::Board;
use crate::board::board_utils::{Color, Square};
use crate::board::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_LIMIT};
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult, MoveRejection};
use crate::game::game_status::{is_insufficient_material, DrawReason, GameStatus};
use crate::game::move_history::MoveHistory;
use crate::move_generation::legal_move_generator::resolve_move;
use crate::moves::chess_move::{Move, PromotionChoice};
use crate::moves::notation::notation_with_promotion;
use crate::player::player::Player;
use crate::utils::fen_generator::position_key;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white: Player,
    black: Player,
    history: MoveHistory,
    repetitions: HashMap<String, u32>,
    status: GameStatus,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::initial_position())
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Ok(Self::from_board(Board::from_fen(fen)?))
    }

    pub fn from_board(board: Board) -> Self {
        let white = Player::from_board(&board, Color::White);
        let black = Player::from_board(&board, Color::Black);
        let mut game = Self {
            repetitions: HashMap::from([(position_key(&board), 1)]),
            board,
            white,
            black,
            history: MoveHistory::new(),
            status: GameStatus::Ongoing,
        };
        game.status = game.compute_status();
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn white(&self) -> &Player {
        &self.white
    }

    #[inline]
    pub fn black(&self) -> &Player {
        &self.black
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// The player whose turn it is.
    pub fn side_to_move(&self) -> &Player {
        self.player(self.board.turn())
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// How many times the current position has occurred.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&position_key(&self.board))
            .copied()
            .unwrap_or(0)
    }

    /// Turn a (source, destination) selection into a legal move.
    pub fn resolve_move(&self, from: Square, to: Square) -> ChessResult<Move> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }
        resolve_move(&self.board, from, to)
    }

    /// Commit `mv`. `promotion` is only accepted for pawn moves onto the
    /// last rank; those default to a queen when it is `None`.
    pub fn make_move(
        &mut self,
        mv: Move,
        promotion: Option<PromotionChoice>,
    ) -> ChessResult<GameStatus> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }
        let mover = self.board.turn();
        // Apply the generated instance, never the caller's: equality ignores
        // the victim and the rook squares.
        let legal = if mv.piece().color() == mover {
            self.side_to_move()
                .legal_moves()
                .into_iter()
                .find(|candidate| *candidate == mv)
        } else {
            None
        };
        let Some(mv) = legal else {
            // Recover the precise reason, falling back to "unreachable".
            let reason = match resolve_move(&self.board, mv.from(), mv.to()) {
                Err(ChessError::MoveRejected { reason, .. }) => reason,
                _ => MoveRejection::Unreachable,
            };
            return Err(ChessError::MoveRejected {
                from: mv.from(),
                to: mv.to(),
                reason,
            });
        };
        if promotion.is_some() && !mv.requires_promotion() {
            return Err(ChessError::MoveRejected {
                from: mv.from(),
                to: mv.to(),
                reason: MoveRejection::NotPromotable,
            });
        }

        let choice = promotion.unwrap_or_default();
        let text = notation_with_promotion(&mv, mv.requires_promotion().then_some(choice));
        let fullmove_number = self.board.fullmove_number();

        self.board = self.board.apply_move_promoting(&mv, choice);
        if let Some(victim) = mv.victim() {
            match mover {
                Color::White => self.white.record_capture(*victim),
                Color::Black => self.black.record_capture(*victim),
            }
        }
        self.white.refresh(&self.board);
        self.black.refresh(&self.board);
        self.history.push(mover, fullmove_number, text);
        *self
            .repetitions
            .entry(position_key(&self.board))
            .or_insert(0) += 1;
        self.status = self.compute_status();

        info!(
            color = %mover,
            mv = %self.history.last().map_or("", |entry| entry.text.as_str()),
            status = %self.status,
            "move played"
        );
        if self.status.is_over() {
            info!(status = %self.status, moves = self.history.len(), "game over");
        }
        Ok(self.status)
    }

    /// Resolve and commit a move in one step.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionChoice>,
    ) -> ChessResult<GameStatus> {
        let mv = self.resolve_move(from, to)?;
        self.make_move(mv, promotion)
    }

    /// [`Game::play`] with algebraic squares such as `"e2"`, `"e4"`.
    pub fn play_algebraic(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<PromotionChoice>,
    ) -> ChessResult<GameStatus> {
        self.play(
            Square::from_algebraic(from)?,
            Square::from_algebraic(to)?,
            promotion,
        )
    }

    /// Ask `engine` for a move and commit it. Engines promote to a queen.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<Move> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }
        let output = engine.choose_move(&self.board, &self.white, &self.black);
        let mv = output.best_move.ok_or(ChessError::GameOver)?;
        self.make_move(mv, None)?;
        Ok(mv)
    }

    fn compute_status(&self) -> GameStatus {
        let mover = self.side_to_move();
        if mover.is_in_checkmate() {
            return GameStatus::Checkmate {
                winner: mover.color().opposite(),
            };
        }
        if mover.is_in_stalemate() {
            return GameStatus::Stalemate;
        }
        if is_insufficient_material(&self.board, &self.white, &self.black) {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        if self.board.halfmove_clock() >= FIFTY_MOVE_HALFMOVES {
            return GameStatus::Draw(DrawReason::FiftyMoveRule);
        }
        if self.repetition_count() >= REPETITION_LIMIT {
            return GameStatus::Draw(DrawReason::ThreefoldRepetition);
        }
        if mover.is_in_check() {
            return GameStatus::Check(mover.color());
        }
        GameStatus::Ongoing
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
