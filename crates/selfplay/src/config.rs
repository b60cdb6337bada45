use std::path::Path;

use serde::{Deserialize, Serialize};
use strategy::{ConfigError, Strategy, config};

/// Configuration for a self-play match, usually read from TOML:
///
/// ```toml
/// games = 4
/// max_plies = 120
/// seed = 7
/// white = "minimax:2"
/// black = "capture"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies per game before it is scored as unfinished
    pub max_plies: u32,
    /// Seed for the per-game random sources
    pub seed: u64,
    /// Strategy of the first player
    pub white: Strategy,
    /// Strategy of the second player
    pub black: Strategy,
    /// Swap colors every other game
    pub alternate_colors: bool,
    /// Starting position; the standard one when absent
    pub start_fen: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 200,
            seed: 0,
            white: Strategy::Minimax { depth: 2 },
            black: Strategy::Random,
            alternate_colors: false,
            start_fen: None,
        }
    }
}

impl MatchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        config::load_toml(path)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        config::from_toml_str(text)
    }
}
