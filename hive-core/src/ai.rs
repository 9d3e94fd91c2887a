//! Minimax AI with alpha-beta pruning, plus a uniform random player

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::HiveError;
use crate::eval::{evaluate, terminal_score, Score};
use crate::game::{GameState, Move, Player};
use crate::moves::available_moves;
use crate::win::outcome;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: i32 = 3;

/// Widest window for a root search
pub const ALPHA_INIT: Score = Score::MIN;
pub const BETA_INIT: Score = Score::MAX;

// ============================================================================
// MINIMAX
// ============================================================================

/// Outcome of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// `None` at leaves and when the side to move has no legal move
    pub best_move: Option<Move>,
    pub score: Score,
    /// Positions visited below this node (leaves count one each)
    pub nodes: u64,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self {
            best_move: None,
            score,
            nodes: 1,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning, scored for `player`.
///
/// `player` maximizes and the opponent minimizes. Moves are explored in
/// generator order and the first move reaching the extreme score is chosen.
pub fn minimax(
    state: &GameState,
    player: Player,
    depth: i32,
    alpha: Score,
    beta: Score,
) -> Result<SearchResult, HiveError> {
    search(state, player, depth, alpha, beta, true)
}

/// Same search without pruning; visits every node down to `depth`
pub fn minimax_exhaustive(
    state: &GameState,
    player: Player,
    depth: i32,
) -> Result<SearchResult, HiveError> {
    search(state, player, depth, ALPHA_INIT, BETA_INIT, false)
}

fn search(
    state: &GameState,
    player: Player,
    depth: i32,
    mut alpha: Score,
    mut beta: Score,
    prune: bool,
) -> Result<SearchResult, HiveError> {
    if depth <= 0 {
        return Ok(SearchResult::leaf(evaluate(state, player)));
    }

    if let Some(score) = terminal_score(outcome(state), player) {
        return Ok(SearchResult::leaf(score));
    }

    let moves = available_moves(state);
    if moves.is_empty() {
        return Ok(SearchResult::leaf(evaluate(state, player)));
    }

    let maximizing = state.current_player() == player;
    let mut best: Option<(Move, Score)> = None;
    let mut nodes = 0u64;

    for mv in moves {
        let child = state.with_move(mv)?;
        let result = search(&child, player, depth - 1, alpha, beta, prune)?;
        let score = result.score;
        nodes += result.nodes;

        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }

        if prune && beta <= alpha {
            break;
        }
    }

    // moves was non-empty, so at least one child was scored
    let (best_move, score) = match best {
        Some(b) => b,
        None => return Ok(SearchResult::leaf(evaluate(state, player))),
    };

    Ok(SearchResult {
        best_move: Some(best_move),
        score,
        nodes,
    })
}

// ============================================================================
// PLAYERS
// ============================================================================

/// Alpha-Beta AI player
#[derive(Clone, Debug)]
pub struct MinimaxAI {
    pub depth: i32,
}

impl MinimaxAI {
    pub fn new(depth: i32) -> Self {
        Self { depth }
    }

    /// Search the position for the side to move
    pub fn search(&self, state: &GameState) -> Result<SearchResult, HiveError> {
        let player = state.current_player();
        let result = minimax(state, player, self.depth, ALPHA_INIT, BETA_INIT)?;
        tracing::debug!(
            player = %player,
            depth = self.depth,
            score = result.score,
            nodes = result.nodes,
            "search finished"
        );
        Ok(result)
    }

    /// Get best move for current position
    pub fn best_move(&self, state: &GameState) -> Result<Option<Move>, HiveError> {
        Ok(self.search(state)?.best_move)
    }
}

impl Default for MinimaxAI {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// Pick uniformly among the legal moves
pub fn random_move<R: Rng>(state: &GameState, rng: &mut R) -> Option<Move> {
    available_moves(state).choose(rng).copied()
}

/// Random player with its own seeded generator
#[derive(Clone, Debug)]
pub struct RandomAI {
    rng: ChaCha8Rng,
}

impl RandomAI {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        random_move(state, &mut self.rng)
    }
}

// ============================================================================
// TESTS
// ============================================================================
