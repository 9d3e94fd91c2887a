//! Play command - a single game between two players
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_players(), report_game()
//! - Level 3: (delegated to hive-match)
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;

use hive_core::{GameResult, GameState, GameView, Rules};
use hive_match::{play_game, AiConfig, GameOutcome, PlayerType};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// White player: minimax or random
    #[arg(long, default_value = "minimax")]
    pub white: PlayerType,

    /// Black player: minimax or random
    #[arg(long, default_value = "minimax")]
    pub black: PlayerType,

    /// Minimax search depth
    #[arg(long, default_value = "3")]
    pub depth: i32,

    /// Maximum plies before the game is abandoned
    #[arg(long, default_value = "200")]
    pub max_plies: u32,

    /// Forbid moving tiles before the queen is placed
    #[arg(long)]
    pub strict: bool,

    /// Print the final position as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let (white, black) = build_players(&args);
    let rules = if args.strict { Rules::strict() } else { Rules::default() };

    tracing::info!("Starting game: {} (white) vs {} (black)", white, black);

    let outcome = play_game(&white, &black, rules, args.max_plies, seed.unwrap_or(42))?;

    report_game(&outcome, rules, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build both player configs from arguments
fn build_players(args: &PlayArgs) -> (AiConfig, AiConfig) {
    let make = |player_type: PlayerType| AiConfig {
        player_type,
        depth: args.depth,
        seed: None,
    };
    (make(args.white), make(args.black))
}

/// Report the finished game
fn report_game(outcome: &GameOutcome, rules: Rules, args: &PlayArgs) -> Result<()> {
    for (ply, mv) in outcome.moves.iter().enumerate() {
        let side = if ply % 2 == 0 { "white" } else { "black" };
        println!("{:>4}. {:<5} {}", ply + 1, side, mv);
    }

    println!("\n{}", describe_result(outcome));
    println!("Positions searched: {}", outcome.nodes);

    if args.json {
        let state = replay(&outcome.moves, rules)?;
        println!("{}", GameView::from_state(&state).to_json()?);
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Rebuild the final position from a move list
fn replay(moves: &[hive_core::Move], rules: Rules) -> Result<GameState> {
    let mut state = GameState::with_rules(rules);
    for &mv in moves {
        state.apply_move(mv)?;
    }
    Ok(state)
}

fn describe_result(outcome: &GameOutcome) -> String {
    match outcome.result {
        GameResult::WhiteWins => format!("White wins after {} plies", outcome.plies),
        GameResult::BlackWins => format!("Black wins after {} plies", outcome.plies),
        GameResult::Draw => format!("Draw: both queens surrounded after {} plies", outcome.plies),
        GameResult::Ongoing if outcome.stalemate => format!("No legal move after {} plies", outcome.plies),
        GameResult::Ongoing => format!("Unfinished after {} plies", outcome.plies),
    }
}
