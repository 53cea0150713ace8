//! Minimax engine driven by [`EngineConfig`].

use crate::board::board::Board;
use crate::config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::player::player::Player;
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::Minimax;

pub struct MinimaxEngine {
    config: EngineConfig,
    search: Minimax<StandardScorer>,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            search: Minimax::new(StandardScorer::new(config.weights), config.move_ordering),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, board: &Board, white: &Player, black: &Player) -> EngineOutput {
        let depth = self.config.search_depth;
        let best_move = self.search.search(board, white, black, depth);

        let mut out = EngineOutput {
            best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "minimax depth {} nodes {}",
            depth,
            self.search.nodes_searched()
        ));
        if let Some(mv) = best_move {
            out.info_lines.push(format!("minimax best {mv}"));
        }
        out
    }
}
