//! Hive CLI - Command-line interface
//!
//! Commands:
//! - play: Play a single game between two players
//! - match: Play many games and report win rates
//! - analyze: Compare pruned and exhaustive search on a position
//! - show: Print the display projection of a position as JSON

mod analyze;
mod match_cmd;
mod play_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use hive_core::{random_move, GameState, GameView};

#[derive(Parser)]
#[command(name = "hive")]
#[command(about = "Hive rules engine and minimax AI")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a match between two players
    Match(match_cmd::MatchArgs),
    /// Compare alpha-beta against exhaustive minimax
    Analyze(analyze::AnalyzeArgs),
    /// Print a position for display layers
    Show {
        /// Random plies to play from the empty board first
        #[arg(long, default_value = "0")]
        plies: usize,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Analyze(args) => analyze::run(args, cli.seed),
        Commands::Show { plies } => {
            let state = random_position(plies, cli.seed.unwrap_or(1))?;
            println!("{}", GameView::from_state(&state).to_json()?);
            Ok(())
        }
    }
}

/// Play up to `plies` seeded random moves from the empty board
pub(crate) fn random_position(plies: usize, seed: u64) -> Result<GameState> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = GameState::new();
    for _ in 0..plies {
        if state.result().is_decided() {
            break;
        }
        match random_move(&state, &mut rng) {
            Some(mv) => state.apply_move(mv)?,
            None => break,
        }
    }
    Ok(state)
}
