//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Every node works on a fresh board produced by applying a move to a copy
//! and on cloned players refreshed against it; the caller's board and
//! players are never touched. Pawns reaching the last rank are promoted to
//! queens.

use tracing::debug;

use crate::board::board::Board;
use crate::board::board_utils::Color;
use crate::moves::chess_move::{Move, PromotionChoice};
use crate::player::player::Player;
use crate::search::board_scoring::{BoardScorer, StandardScorer};

#[derive(Debug, Clone)]
pub struct Minimax<S: BoardScorer = StandardScorer> {
    scorer: S,
    move_ordering: bool,
    nodes: u64,
}

/// A position reached during search.
struct Node {
    board: Board,
    white: Player,
    black: Player,
}

impl Node {
    fn mover(&self) -> &Player {
        match self.board.turn() {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

impl<S: BoardScorer> Minimax<S> {
    pub fn new(scorer: S, move_ordering: bool) -> Self {
        Self {
            scorer,
            move_ordering,
            nodes: 0,
        }
    }

    /// Positions visited by the last call to [`Minimax::search`].
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Best move for the side to move, or `None` when it has no legal move.
    ///
    /// A depth of 0 is searched as 1.
    pub fn search(
        &mut self,
        board: &Board,
        white: &Player,
        black: &Player,
        depth: u8,
    ) -> Option<Move> {
        self.nodes = 0;
        let depth = depth.max(1);
        let mover = board.turn();
        let candidates = match mover {
            Color::White => white.legal_moves(),
            Color::Black => black.legal_moves(),
        };
        if candidates.is_empty() {
            return None;
        }
        let candidates = self.sort(board, white, black, candidates, depth - 1);

        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for mv in candidates {
            let child = self.child(board, white, black, &mv);
            let opponent = match mover {
                Color::White => &child.black,
                Color::Black => &child.white,
            };
            if opponent.is_in_checkmate() {
                debug!(%mv, "mating move found at the root");
                return Some(mv);
            }

            let score = match mover {
                Color::White => self.minimize_node(&child, depth - 1, alpha, beta),
                Color::Black => self.maximize_node(&child, depth - 1, alpha, beta),
            };
            let improves = best.map_or(true, |(_, best_score)| match mover {
                Color::White => score > best_score,
                Color::Black => score < best_score,
            });
            if improves {
                debug!(%mv, score, "new best move");
                best = Some((mv, score));
                match mover {
                    Color::White => alpha = alpha.max(score),
                    Color::Black => beta = beta.min(score),
                }
            }
        }

        debug!(nodes = self.nodes, depth, "search finished");
        best.map(|(mv, _)| mv)
    }

    /// Score of a White-to-move node.
    pub fn maximize(
        &mut self,
        board: &Board,
        white: &Player,
        black: &Player,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        let node = Node {
            board: board.clone(),
            white: white.clone(),
            black: black.clone(),
        };
        self.maximize_node(&node, depth, alpha, beta)
    }

    /// Score of a Black-to-move node.
    pub fn minimize(
        &mut self,
        board: &Board,
        white: &Player,
        black: &Player,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        let node = Node {
            board: board.clone(),
            white: white.clone(),
            black: black.clone(),
        };
        self.minimize_node(&node, depth, alpha, beta)
    }

    /// Order `moves` best-first for the side to move by the static score of
    /// the position each one produces. Stable: equal scores keep their
    /// generation order. A no-op when move ordering is disabled.
    pub fn sort(
        &mut self,
        board: &Board,
        white: &Player,
        black: &Player,
        moves: Vec<Move>,
        depth: u8,
    ) -> Vec<Move> {
        if !self.move_ordering || moves.len() < 2 {
            return moves;
        }
        let mut scored: Vec<(i32, Move)> = moves
            .into_iter()
            .map(|mv| {
                let child = self.child(board, white, black, &mv);
                (self.static_score(&child, depth), mv)
            })
            .collect();
        match board.turn() {
            Color::White => scored.sort_by(|a, b| b.0.cmp(&a.0)),
            Color::Black => scored.sort_by(|a, b| a.0.cmp(&b.0)),
        }
        scored.into_iter().map(|(_, mv)| mv).collect()
    }

    fn maximize_node(&mut self, node: &Node, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        let moves = node.white.legal_moves();
        if depth == 0 || moves.is_empty() {
            return self.static_score(node, depth);
        }
        let moves = self.sort(&node.board, &node.white, &node.black, moves, depth - 1);

        let mut highest = i32::MIN;
        for mv in moves {
            let child = self.child(&node.board, &node.white, &node.black, &mv);
            highest = highest.max(self.minimize_node(&child, depth - 1, alpha, beta));
            alpha = alpha.max(highest);
            if alpha >= beta {
                break;
            }
        }
        highest
    }

    fn minimize_node(&mut self, node: &Node, depth: u8, alpha: i32, mut beta: i32) -> i32 {
        let moves = node.black.legal_moves();
        if depth == 0 || moves.is_empty() {
            return self.static_score(node, depth);
        }
        let moves = self.sort(&node.board, &node.white, &node.black, moves, depth - 1);

        let mut lowest = i32::MAX;
        for mv in moves {
            let child = self.child(&node.board, &node.white, &node.black, &mv);
            lowest = lowest.min(self.maximize_node(&child, depth - 1, alpha, beta));
            beta = beta.min(lowest);
            if alpha >= beta {
                break;
            }
        }
        lowest
    }

    /// Stalemate scores 0; everything else, mates included, goes to the
    /// scorer.
    fn static_score(&self, node: &Node, depth: u8) -> i32 {
        if node.mover().is_in_stalemate() {
            0
        } else {
            self.scorer.score(&node.board, &node.white, &node.black, depth)
        }
    }

    fn child(&mut self, board: &Board, white: &Player, black: &Player, mv: &Move) -> Node {
        self.nodes += 1;
        let next = board.apply_move_promoting(mv, PromotionChoice::Queen);
        let mut white = white.clone();
        let mut black = black.clone();
        if let Some(victim) = mv.victim() {
            match mv.piece().color() {
                Color::White => white.record_capture(*victim),
                Color::Black => black.record_capture(*victim),
            }
        }
        white.refresh(&next);
        black.refresh(&next);
        Node {
            board: next,
            white,
            black,
        }
    }
}

impl Default for Minimax<StandardScorer> {
    fn default() -> Self {
        Self::new(StandardScorer::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::MaterialScorer;

    fn setup(fen: &str) -> (Board, Player, Player) {
        let board = Board::from_fen(fen).expect("test FEN should parse");
        let white = Player::from_board(&board, Color::White);
        let black = Player::from_board(&board, Color::Black);
        (board, white, black)
    }

    #[test]
    fn depth_one_takes_the_free_piece() {
        let (board, white, black) = setup("7k/6pp/8/8/4n3/2N5/8/K7 w - - 0 1");
        let best = Minimax::default()
            .search(&board, &white, &black, 1)
            .expect("white has moves");
        assert!(best.is_capture());
        assert_eq!(best.to_string(), "Nxe4");
    }

    #[test]
    fn black_takes_the_free_piece_too() {
        let (board, white, black) = setup("k7/8/2n5/4N3/8/8/6PP/7K b - - 0 1");
        let best = Minimax::default()
            .search(&board, &white, &black, 1)
            .expect("black has moves");
        assert_eq!(best.to_string(), "Nxe5");
    }

    #[test]
    fn finds_back_rank_mate() {
        let (board, white, black) = setup("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let best = Minimax::default()
            .search(&board, &white, &black, 2)
            .expect("white has moves");
        assert_eq!(best.to_string(), "Ra8");
    }

    #[test]
    fn does_not_grab_a_defended_pawn_with_the_queen() {
        let (board, white, black) = setup("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1");
        let mut search = Minimax::default();
        let best = search.search(&board, &white, &black, 2).expect("white has moves");
        assert_ne!(best.to_string(), "Qxd5");
        assert!(search.nodes_searched() > 0);
    }

    #[test]
    fn ordering_does_not_change_the_value_of_the_search() {
        let (board, white, black) = setup("7k/6pp/8/8/4n3/2N5/8/K7 w - - 0 1");
        let ordered = Minimax::new(MaterialScorer, true).search(&board, &white, &black, 2);
        let plain = Minimax::new(MaterialScorer, false).search(&board, &white, &black, 2);
        assert_eq!(ordered.map(|m| m.to_string()), Some("Nxe4".to_owned()));
        assert_eq!(plain.map(|m| m.to_string()), Some("Nxe4".to_owned()));
    }

    #[test]
    fn maximize_and_minimize_agree_on_a_quiet_leaf() {
        let (board, white, black) = setup("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let mut search = Minimax::new(MaterialScorer, false);
        assert_eq!(search.maximize(&board, &white, &black, 0, i32::MIN, i32::MAX), 500);
        assert_eq!(search.minimize(&board, &white, &black, 0, i32::MIN, i32::MAX), 500);
        // White keeps the rook a move later whatever it plays.
        assert_eq!(search.maximize(&board, &white, &black, 1, i32::MIN, i32::MAX), 500);
    }

    #[test]
    fn sort_puts_captures_first_for_white() {
        let (board, white, black) = setup("7k/6pp/8/8/4n3/2N5/8/K7 w - - 0 1");
        let mut search = Minimax::new(MaterialScorer, true);
        let sorted = search.sort(&board, &white, &black, white.legal_moves(), 0);
        assert_eq!(sorted.len(), white.legal_move_count());
        assert_eq!(sorted[0].to_string(), "Nxe4");
    }

    #[test]
    fn no_moves_means_no_result() {
        let (board, white, black) = setup("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(Minimax::default().search(&board, &white, &black, 2).is_none());
    }

    #[test]
    fn search_leaves_inputs_untouched() {
        let (board, white, black) = setup("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = board.clone();
        let moves_before = white.legal_moves();
        let _ = Minimax::default().search(&board, &white, &black, 2);
        assert_eq!(board, before);
        assert_eq!(white.legal_moves(), moves_before);
        assert!(white.captured_pieces().is_empty());
    }

    #[test]
    fn promotes_when_it_wins_material() {
        let (board, white, black) = setup("7k/P7/8/8/8/8/8/K7 w - - 0 1");
        let best = Minimax::new(MaterialScorer, true)
            .search(&board, &white, &black, 1)
            .expect("white has moves");
        assert_eq!(best.to_string(), "a8");
        assert!(best.requires_promotion());
    }
}
