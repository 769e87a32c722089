use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::output::OutputFormat;

pub const DEFAULT_CAPACITY: usize = 10;

/// Root configuration structure, read from `.scoreboard.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreboardConfig {
    /// Board sizing
    #[serde(default)]
    pub board: BoardConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Maximum number of entries kept on the board
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Disable colors in terminal output
    #[serde(default)]
    pub plain: bool,
}

pub fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl ScoreboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.board.capacity == 0 {
            return Err(Error::Configuration(
                "board.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
