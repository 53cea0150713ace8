//! Engine configuration.
//!
//! Loaded from TOML. Every key is optional; missing keys take the defaults
//! below.
//!
//! ```toml
//! search_depth = 4
//! move_ordering = true
//!
//! [weights]
//! check_bonus = 50
//! checkmate_bonus = 10000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ChessError, ChessResult};

/// Terms of the static evaluation, in centipawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Awarded when the opponent is in check.
    pub check_bonus: i32,
    /// Awarded when the opponent is checkmated.
    pub checkmate_bonus: i32,
    /// Multiplied by the remaining depth at a mate, so faster mates win.
    pub depth_bonus: i32,
    /// Awarded once a side has castled.
    pub castle_bonus: i32,
    /// Multiplied by the number of legal moves.
    pub mobility_weight: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            check_bonus: 50,
            checkmate_bonus: 10_000,
            depth_bonus: 100,
            castle_bonus: 60,
            mobility_weight: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched by the minimax engine.
    pub search_depth: u8,
    /// Pre-sort candidate moves by their static score.
    pub move_ordering: bool,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            move_ordering: true,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        let config: EngineConfig =
            toml::from_str(text).map_err(|e| ChessError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ChessResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ChessResult<String> {
        toml::to_string(self).map_err(|e| ChessError::Config(e.to_string()))
    }

    /// Same configuration searching `depth` plies.
    pub fn with_depth(self, depth: u8) -> ChessResult<Self> {
        let config = Self {
            search_depth: depth,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ChessResult<()> {
        if self.search_depth == 0 {
            return Err(ChessError::Config(
                "search_depth must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
