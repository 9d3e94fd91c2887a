//! Configuration types for AI players and matches
//!
//! Level 4 - Utilities and configuration

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use hive_core::ai::DEFAULT_DEPTH;
use hive_core::Rules;
use serde::{Deserialize, Serialize};

/// Player type for games
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Alpha-beta minimax search
    #[default]
    Minimax,
    /// Uniform random legal move
    Random,
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Minimax => f.write_str("minimax"),
            PlayerType::Random => f.write_str("random"),
        }
    }
}

impl FromStr for PlayerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "ai" => Ok(PlayerType::Minimax),
            "random" => Ok(PlayerType::Random),
            other => anyhow::bail!("unknown player type: {other}"),
        }
    }
}

/// AI configuration for one side
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Player type (Minimax or Random)
    pub player_type: PlayerType,
    /// Search depth for minimax
    pub depth: i32,
    /// Offset added to the game seed, so seeded players still vary between games
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            player_type: PlayerType::Minimax,
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Create config for minimax at given depth
    pub fn minimax(depth: i32) -> Self {
        Self {
            player_type: PlayerType::Minimax,
            depth,
            ..Default::default()
        }
    }

    /// Create config for a random player
    pub fn random() -> Self {
        Self {
            player_type: PlayerType::Random,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl fmt::Display for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.player_type {
            PlayerType::Minimax => write!(f, "minimax(depth={})", self.depth),
            PlayerType::Random => f.write_str("random"),
        }
    }
}

/// Match configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Plays white in even-numbered games
    pub first: AiConfig,
    /// Plays black in even-numbered games
    pub second: AiConfig,
    /// Number of games to play
    pub games: usize,
    /// Swap colors every other game
    pub alternate_colors: bool,
    /// Plies after which an unfinished game counts as a draw
    pub max_plies: u32,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    /// Whether to run games in parallel
    pub parallel: bool,
    /// Rule variations
    pub rules: Rules,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first: AiConfig::default(),
            second: AiConfig::random(),
            games: 10,
            alternate_colors: true,
            max_plies: 200,
            seed: 42,
            parallel: true,
            rules: Rules::default(),
        }
    }
}

impl MatchConfig {
    /// Match between two configured players
    pub fn new(first: AiConfig, second: AiConfig, games: usize) -> Self {
        Self {
            first,
            second,
            games,
            ..Default::default()
        }
    }

    /// Load from JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read match config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse match config: {}", path.display()))?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write match config: {}", path.display()))?;
        Ok(())
    }
}
