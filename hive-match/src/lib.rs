//! Hive Match - Playing games between AI players
//!
//! This crate provides match infrastructure:
//! - AI player and match configuration
//! - Single games between two players
//! - Multi-game matches with color alternation
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: play_match (phases)
//! - Level 3: play_game (steps)
//! - Level 4: configuration

mod config;
mod game_runner;
mod match_play;

pub use config::{AiConfig, MatchConfig, PlayerType};
pub use game_runner::{play_game, GameOutcome, GameRunner};
pub use match_play::{play_match, MatchResult};
