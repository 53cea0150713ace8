//! Draw detection through the game record.

use tilechess::board::board_utils::Color;
use tilechess::game::game::Game;
use tilechess::game::game_status::{DrawReason, GameStatus};

#[test]
fn king_and_bishop_against_king_is_a_draw() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1").expect("FEN should parse");
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::InsufficientMaterial));
}

#[test]
fn king_and_knight_against_king_is_a_draw() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/4K1N1 b - - 0 1").expect("FEN should parse");
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::InsufficientMaterial));
}

#[test]
fn king_and_rook_against_king_is_not_a_draw() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
    assert_eq!(game.status(), GameStatus::Ongoing);
    assert!(!game.white().has_bare_king());
    assert!(game.black().has_bare_king());
}

#[test]
fn stalemate_is_reported() {
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.status().is_over());
    assert_eq!(game.status().winner(), None);
}

#[test]
fn fifty_moves_without_progress() {
    let game = Game::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 60").expect("FEN should parse");
    assert_eq!(game.status(), GameStatus::Draw(DrawReason::FiftyMoveRule));

    let mut game = Game::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").expect("FEN should parse");
    assert_eq!(
        game.play_algebraic("e2", "e3", None).expect("pawn push is legal"),
        GameStatus::Ongoing
    );
    assert_eq!(game.board().halfmove_clock(), 0);
}

#[test]
fn rook_shuffle_repeats() {
    let mut game = Game::from_fen("7k/8/8/8/8/8/8/R6K w - - 0 1").expect("FEN should parse");
    let cycle = [("a1", "a2"), ("h8", "g8"), ("a2", "a1"), ("g8", "h8")];
    let mut status = game.status();
    for _ in 0..2 {
        for (from, to) in cycle {
            status = game.play_algebraic(from, to, None).expect("shuffle is legal");
        }
    }
    assert_eq!(status, GameStatus::Draw(DrawReason::ThreefoldRepetition));
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(game.history().len(), 8);
    assert_eq!(game.side_to_move().color(), Color::White);
}

#[test]
fn position_after_a_double_push_repeats_without_its_en_passant_target() {
    let mut game = Game::new();
    game.play_algebraic("e2", "e4", None).expect("e4 is legal");
    assert_eq!(game.repetition_count(), 1);

    let cycle = [("g8", "f6"), ("g1", "f3"), ("f6", "g8"), ("f3", "g1")];
    let mut status = game.status();
    for _ in 0..2 {
        for (from, to) in cycle {
            status = game.play_algebraic(from, to, None).expect("shuffle is legal");
        }
    }
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(status, GameStatus::Draw(DrawReason::ThreefoldRepetition));
}
