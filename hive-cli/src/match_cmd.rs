//! Match command - play games between two AI players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_config(), report_results()
//! - Level 3: play_match() (delegated to hive-match)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hive_core::GameResult;
use hive_match::{play_match, MatchConfig, MatchResult, PlayerType};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Match config JSON file (flags below override its values)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// First player: minimax or random
    #[arg(long)]
    pub first: Option<PlayerType>,

    /// Second player: minimax or random
    #[arg(long)]
    pub second: Option<PlayerType>,

    /// Number of games to play (will alternate colors)
    #[arg(long)]
    pub games: Option<usize>,

    /// Minimax search depth for both players
    #[arg(long)]
    pub depth: Option<i32>,

    /// Maximum plies per game
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Forbid moving tiles before the queen is placed
    #[arg(long)]
    pub strict: bool,

    /// Play games one after another
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// This function reads like a table of contents:
/// 1. Build the match config
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let config = load_config(&args, seed)?;

    tracing::info!(
        "Starting match: {} vs {} ({} games)",
        config.first,
        config.second,
        config.games
    );

    let results = play_match(&config)?;

    report_results(&results, &config, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the config file (if any) and apply command-line overrides
fn load_config(args: &MatchArgs, seed: Option<u64>) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    if let Some(first) = args.first {
        config.first.player_type = first;
    }
    if let Some(second) = args.second {
        config.second.player_type = second;
    }
    if let Some(depth) = args.depth {
        config.first.depth = depth;
        config.second.depth = depth;
    }
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if args.strict {
        config.rules.queen_before_movement = true;
    }
    if args.sequential {
        config.parallel = false;
    }

    Ok(config)
}

/// Report match results
fn report_results(results: &MatchResult, config: &MatchConfig, json: bool) -> Result<()> {
    if json {
        print_json_results(results, config)
    } else {
        print_text_results(results, config);
        Ok(())
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn result_label(result: GameResult) -> &'static str {
    match result {
        GameResult::WhiteWins => "white wins",
        GameResult::BlackWins => "black wins",
        GameResult::Draw => "draw",
        GameResult::Ongoing => "unfinished",
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResult, config: &MatchConfig) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        result: &'static str,
        plies: u32,
        nodes: u64,
        stalemate: bool,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        first: String,
        second: String,
        total_games: u32,
        first_wins: u32,
        second_wins: u32,
        draws: u32,
        stalemates: u32,
        avg_plies: f32,
        first_win_rate: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        first: config.first.to_string(),
        second: config.second.to_string(),
        total_games: results.games_played,
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        draws: results.draws,
        stalemates: results.stalemates,
        avg_plies: results.avg_plies,
        first_win_rate: results.first_win_rate(),
        games: results
            .game_outcomes
            .iter()
            .enumerate()
            .map(|(i, g)| JsonGame {
                game_number: i + 1,
                result: result_label(g.result),
                plies: g.plies,
                nodes: g.nodes,
                stalemate: g.stalemate,
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print results as text
fn print_text_results(results: &MatchResult, config: &MatchConfig) {
    println!("\n=== Match Results ===");
    println!("First:  {}", config.first);
    println!("Second: {}", config.second);
    println!("Total games:  {}", results.games_played);
    println!(
        "First wins:   {} ({:.1}%)",
        results.first_wins,
        results.first_win_rate() * 100.0
    );
    println!(
        "Second wins:  {} ({:.1}%)",
        results.second_wins,
        results.second_win_rate() * 100.0
    );
    println!(
        "Draws:        {} ({:.1}%)",
        results.draws,
        results.draw_rate() * 100.0
    );
    if results.stalemates > 0 {
        println!("Stalemates:   {}", results.stalemates);
    }
    println!("Avg plies:    {:.1}", results.avg_plies);

    println!("\nGame details:");
    for (i, game) in results.game_outcomes.iter().enumerate() {
        println!(
            "  Game {}: {} in {} plies",
            i + 1,
            result_label(game.result),
            game.plies
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> MatchArgs {
        MatchArgs {
            config: None,
            first: None,
            second: None,
            games: None,
            depth: None,
            max_plies: None,
            strict: false,
            sequential: false,
            json: false,
        }
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(&args(), None).unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_load_config_overrides() {
        let args = MatchArgs {
            first: Some(PlayerType::Random),
            second: Some(PlayerType::Minimax),
            games: Some(3),
            depth: Some(1),
            max_plies: Some(60),
            strict: true,
            sequential: true,
            ..args()
        };
        let config = load_config(&args, Some(9)).unwrap();
        assert_eq!(config.first.player_type, PlayerType::Random);
        assert_eq!(config.second.player_type, PlayerType::Minimax);
        assert_eq!(config.second.depth, 1);
        assert_eq!(config.games, 3);
        assert_eq!(config.max_plies, 60);
        assert_eq!(config.seed, 9);
        assert!(config.rules.queen_before_movement);
        assert!(!config.parallel);
    }

    #[test]
    fn test_strict_keeps_loaded_rules() {
        let path = std::env::temp_dir().join(format!("hive-match-cmd-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "rules": { "queen_deadline_round": 3 } }"#).unwrap();
        let args = MatchArgs {
            config: Some(path.clone()),
            strict: true,
            ..args()
        };
        let config = load_config(&args, None);
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.rules.queen_deadline_round, 3);
        assert!(config.rules.queen_before_movement);
    }

    #[test]
    fn test_load_config_missing_file() {
        let args = MatchArgs {
            config: Some(PathBuf::from("/nonexistent/match.json")),
            ..args()
        };
        assert!(load_config(&args, None).is_err());
    }

    #[test]
    fn test_result_label() {
        assert_eq!(result_label(GameResult::WhiteWins), "white wins");
        assert_eq!(result_label(GameResult::Ongoing), "unfinished");
    }
}
