//! Hive Core - Rules engine and AI
//!
//! This crate provides the core game logic for Hive:
//! - Hex geometry (unbounded grid with cube coordinates)
//! - Tile kinds and their movement rules
//! - Hive connectivity (contours and the one-hive rule)
//! - Game state, move generation and win detection
//! - Queen-mobility evaluation and alpha-beta minimax AI

pub mod hex;
pub mod pieces;
pub mod hive;
pub mod game;
pub mod moves;
pub mod win;
pub mod eval;
pub mod ai;
pub mod rules;
pub mod view;
pub mod error;

// Re-exports for convenient access
pub use hex::{Hex, DIRECTIONS};
pub use pieces::TileKind;
pub use game::{Board, GameResult, GameState, Hand, Move, Piece, Player};
pub use hive::{find_contour, one_hive, trace_contour};
pub use moves::{available_moves, placeable};
pub use win::{outcome, queen_liberties, queen_position, winner};
pub use eval::{evaluate, Score, WIN_VALUE};
pub use ai::{minimax, minimax_exhaustive, random_move, MinimaxAI, RandomAI, SearchResult, ALPHA_INIT, BETA_INIT};
pub use rules::Rules;
pub use view::GameView;
pub use error::HiveError;
