//! Match play - multiple games between two AI configs
//!
//! Level 2 - Phase-level implementation

use hive_core::{GameResult, HiveError};
use rayon::prelude::*;

use crate::config::MatchConfig;
use crate::game_runner::{play_game, GameOutcome};

/// Result of a match (multiple games)
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// Wins for the first player config
    pub first_wins: u32,
    /// Wins for the second player config
    pub second_wins: u32,
    /// Games that ended without a winner
    pub draws: u32,
    /// Games cut short by a side with no legal move
    pub stalemates: u32,
    /// Average game length in plies
    pub avg_plies: f32,
    /// Total games played
    pub games_played: u32,
    /// Individual game outcomes
    pub game_outcomes: Vec<GameOutcome>,
}

impl MatchResult {
    /// Create empty result
    pub fn empty() -> Self {
        Self {
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            stalemates: 0,
            avg_plies: 0.0,
            games_played: 0,
            game_outcomes: Vec::new(),
        }
    }

    /// Get win rate for the first player
    pub fn first_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.first_wins as f32 / self.games_played as f32
        }
    }

    /// Get win rate for the second player
    pub fn second_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.second_wins as f32 / self.games_played as f32
        }
    }

    /// Get draw rate
    pub fn draw_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.draws as f32 / self.games_played as f32
        }
    }
}

/// Play a match between the two configured players (Level 2 phase)
pub fn play_match(config: &MatchConfig) -> Result<MatchResult, HiveError> {
    if config.games == 0 {
        return Ok(MatchResult::empty());
    }

    let game_configs = prepare_game_configs(config);
    let outcomes = if config.parallel {
        game_configs
            .par_iter()
            .map(|gc| play_single_game(config, gc))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        game_configs
            .iter()
            .map(|gc| play_single_game(config, gc))
            .collect::<Result<Vec<_>, _>>()?
    };

    let result = aggregate_results(outcomes);
    tracing::info!(
        games = result.games_played,
        first_wins = result.first_wins,
        second_wins = result.second_wins,
        draws = result.draws,
        "match finished"
    );
    Ok(result)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Configuration for a single game in a match
#[derive(Clone, Copy, Debug)]
struct GameConfig {
    /// Whether the first player takes white this game
    first_is_white: bool,
    /// Game index (for seeding)
    game_index: usize,
}

/// Prepare game configurations for a match
fn prepare_game_configs(config: &MatchConfig) -> Vec<GameConfig> {
    (0..config.games)
        .map(|i| GameConfig {
            first_is_white: !config.alternate_colors || i % 2 == 0,
            game_index: i,
        })
        .collect()
}

/// Outcome with context about which config was playing which color
struct GameOutcomeWithContext {
    outcome: GameOutcome,
    first_was_white: bool,
}

/// Play a single game with the given configuration
fn play_single_game(config: &MatchConfig, gc: &GameConfig) -> Result<GameOutcomeWithContext, HiveError> {
    let seed = config.seed.wrapping_add(gc.game_index as u64);
    let (white, black) = if gc.first_is_white {
        (&config.first, &config.second)
    } else {
        (&config.second, &config.first)
    };

    let outcome = play_game(white, black, config.rules, config.max_plies, seed)?;
    tracing::debug!(
        game = gc.game_index,
        result = ?outcome.result,
        plies = outcome.plies,
        "game finished"
    );

    Ok(GameOutcomeWithContext {
        outcome,
        first_was_white: gc.first_is_white,
    })
}

/// Aggregate game outcomes into a match result
fn aggregate_results(outcomes: Vec<GameOutcomeWithContext>) -> MatchResult {
    let mut result = MatchResult::empty();
    let mut total_plies = 0u64;

    for owc in outcomes {
        total_plies += owc.outcome.plies as u64;
        if owc.outcome.stalemate {
            result.stalemates += 1;
        }

        // Attribute wins based on who was playing which color
        match owc.outcome.result {
            GameResult::WhiteWins if owc.first_was_white => result.first_wins += 1,
            GameResult::WhiteWins => result.second_wins += 1,
            GameResult::BlackWins if owc.first_was_white => result.second_wins += 1,
            GameResult::BlackWins => result.first_wins += 1,
            GameResult::Draw | GameResult::Ongoing => result.draws += 1,
        }

        result.game_outcomes.push(owc.outcome);
    }

    result.games_played = result.game_outcomes.len() as u32;
    if result.games_played > 0 {
        result.avg_plies = total_plies as f32 / result.games_played as f32;
    }
    result
}
