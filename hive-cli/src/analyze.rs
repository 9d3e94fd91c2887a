//! Analyze command - compare alpha-beta against exhaustive minimax
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: analyze_positions(), report_results()
//! - Level 3: analyze_position()
//! - Level 4: timing utilities, formatting

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;

use hive_core::{minimax, minimax_exhaustive, GameState, SearchResult, ALPHA_INIT, BETA_INIT};

use crate::random_position;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Random plies played before each analyzed position
    #[arg(long, default_value = "8")]
    pub plies: usize,

    /// Number of positions to analyze
    #[arg(long, default_value = "5")]
    pub positions: usize,

    /// Search depth
    #[arg(long, default_value = "2")]
    pub depth: i32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Pruned and exhaustive searches of one position
#[derive(Clone, Debug)]
struct PositionReport {
    seed: u64,
    ply: u32,
    legal_moves: usize,
    pruned: SearchResult,
    pruned_time: Duration,
    exhaustive: SearchResult,
    exhaustive_time: Duration,
}

impl PositionReport {
    fn agrees(&self) -> bool {
        self.pruned.best_move == self.exhaustive.best_move && self.pruned.score == self.exhaustive.score
    }

    fn node_ratio(&self) -> f64 {
        if self.exhaustive.nodes == 0 {
            1.0
        } else {
            self.pruned.nodes as f64 / self.exhaustive.nodes as f64
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run analyze command
///
/// This function reads like a table of contents:
/// 1. Generate random positions and search each both ways
/// 2. Report all results
pub fn run(args: AnalyzeArgs, seed: Option<u64>) -> Result<()> {
    tracing::info!(
        "Analyzing {} positions after {} plies at depth {}",
        args.positions,
        args.plies,
        args.depth
    );

    let reports = analyze_positions(&args, seed.unwrap_or(1))?;

    let disagreements = reports.iter().filter(|r| !r.agrees()).count();
    if disagreements > 0 {
        tracing::warn!(disagreements, "pruned search disagreed with exhaustive search");
    }

    report_results(&reports, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Analyze `args.positions` positions seeded from `base_seed` upward
fn analyze_positions(args: &AnalyzeArgs, base_seed: u64) -> Result<Vec<PositionReport>> {
    (0..args.positions as u64)
        .map(|i| {
            let seed = base_seed.wrapping_add(i);
            let state = random_position(args.plies, seed)?;
            analyze_position(&state, args.depth, seed)
        })
        .collect()
}

/// Report all analysis results
fn report_results(reports: &[PositionReport], json: bool) -> Result<()> {
    if json {
        print_json_results(reports)
    } else {
        print_text_results(reports);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Search one position with and without pruning
fn analyze_position(state: &GameState, depth: i32, seed: u64) -> Result<PositionReport> {
    let player = state.current_player();

    let start = Instant::now();
    let pruned = minimax(state, player, depth, ALPHA_INIT, BETA_INIT)?;
    let pruned_time = start.elapsed();

    let start = Instant::now();
    let exhaustive = minimax_exhaustive(state, player, depth)?;
    let exhaustive_time = start.elapsed();

    Ok(PositionReport {
        seed,
        ply: state.ply(),
        legal_moves: state.legal_moves().len(),
        pruned,
        pruned_time,
        exhaustive,
        exhaustive_time,
    })
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Format duration for display
fn format_duration(d: Duration) -> String {
    if d.as_secs() >= 1 {
        format!("{:.2}s", d.as_secs_f64())
    } else if d.as_millis() >= 1 {
        format!("{:.1}ms", d.as_secs_f64() * 1000.0)
    } else {
        format!("{:.1}us", d.as_secs_f64() * 1_000_000.0)
    }
}

fn format_move(result: &SearchResult) -> String {
    result
        .best_move
        .map(|mv| mv.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Print results as JSON
fn print_json_results(reports: &[PositionReport]) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonPosition {
        seed: u64,
        ply: u32,
        legal_moves: usize,
        agrees: bool,
        pruned: SearchResult,
        pruned_time_ms: f64,
        exhaustive: SearchResult,
        exhaustive_time_ms: f64,
        node_ratio: f64,
    }

    let output: Vec<JsonPosition> = reports
        .iter()
        .map(|r| JsonPosition {
            seed: r.seed,
            ply: r.ply,
            legal_moves: r.legal_moves,
            agrees: r.agrees(),
            pruned: r.pruned,
            pruned_time_ms: r.pruned_time.as_secs_f64() * 1000.0,
            exhaustive: r.exhaustive,
            exhaustive_time_ms: r.exhaustive_time.as_secs_f64() * 1000.0,
            node_ratio: r.node_ratio(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print results as text table
fn print_text_results(reports: &[PositionReport]) {
    println!("\n=== Search Analysis ===\n");
    println!(
        "{:>6} {:>4} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10}  {}",
        "Seed", "Ply", "Moves", "Score", "AB nodes", "Full nodes", "AB time", "Full time", "Best move"
    );
    println!("{}", "-".repeat(100));

    for r in reports {
        let marker = if r.agrees() { "" } else { "  (MISMATCH)" };
        println!(
            "{:>6} {:>4} {:>6} {:>6} {:>10} {:>10} {:>10} {:>10}  {}{}",
            r.seed,
            r.ply,
            r.legal_moves,
            r.pruned.score,
            r.pruned.nodes,
            r.exhaustive.nodes,
            format_duration(r.pruned_time),
            format_duration(r.exhaustive_time),
            format_move(&r.pruned),
            marker
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_position_agrees() {
        let state = random_position(6, 3).unwrap();
        let report = analyze_position(&state, 2, 3).unwrap();
        assert!(report.agrees());
        assert!(report.pruned.nodes <= report.exhaustive.nodes);
        assert!(report.node_ratio() <= 1.0);
    }

    #[test]
    fn test_analyze_positions_count() {
        let args = AnalyzeArgs {
            plies: 4,
            positions: 3,
            depth: 1,
            json: false,
        };
        let reports = analyze_positions(&args, 10).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[1].seed, 11);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_micros(2500)), "2.5ms");
        assert_eq!(format_duration(Duration::from_micros(40)), "40.0us");
    }
}
