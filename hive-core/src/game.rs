//! Game state and move application

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HiveError;
use crate::hex::Hex;
use crate::pieces::{TileKind, TILE_KINDS};
use crate::rules::Rules;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    WhiteWins,
    BlackWins,
    /// Both queens surrounded at once
    Draw,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::WhiteWins => Some(Player::White),
            GameResult::BlackWins => Some(Player::Black),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    pub fn is_decided(self) -> bool {
        self != GameResult::Ongoing
    }
}

/// A tile on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: TileKind,
    pub owner: Player,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}

/// Occupancy grid: at most one tile per cell
pub type Board = FxHashMap<Hex, Piece>;

/// Unplaced tiles of one player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    counts: [u8; TILE_KINDS],
}

impl Hand {
    /// The starting hand
    pub fn full() -> Self {
        Self {
            counts: TileKind::ALL.map(TileKind::starting_count),
        }
    }

    pub fn count(&self, kind: TileKind) -> u8 {
        self.counts[kind.index()]
    }

    pub fn contains(&self, kind: TileKind) -> bool {
        self.count(kind) > 0
    }

    /// Kinds with at least one tile left, in hand order
    pub fn available(&self) -> impl Iterator<Item = TileKind> + '_ {
        TileKind::ALL.into_iter().filter(|&kind| self.contains(kind))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Remove one tile of `kind`; false if none is left
    fn take(&mut self, kind: TileKind) -> bool {
        match self.counts[kind.index()].checked_sub(1) {
            Some(left) => {
                self.counts[kind.index()] = left;
                true
            }
            None => false,
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::full()
    }
}

/// A legal move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Move {
    Place { tile: TileKind, at: Hex },
    Relocate { from: Hex, to: Hex },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { tile, at } => write!(f, "place {} at ({})", tile, at),
            Move::Relocate { from, to } => write!(f, "move ({}) -> ({})", from, to),
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (clone to explore)
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,

    /// Moves applied so far
    ply: u32,

    /// Hands indexed by `Player::index`
    hands: [Hand; 2],

    rules: Rules,
}

impl GameState {
    /// Empty board, full hands, default rules
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self {
            board: Board::default(),
            ply: 0,
            hands: [Hand::full(); 2],
            rules,
        }
    }

    /// Build a position directly from placed tiles.
    ///
    /// Each tile is taken from its owner's hand. `ply` sets whose turn it is.
    pub fn from_tiles(tiles: &[(Hex, Player, TileKind)], ply: u32) -> Result<Self, HiveError> {
        let mut state = Self::new();
        for &(hex, owner, kind) in tiles {
            state.put(hex, Piece { kind, owner })?;
        }
        state.ply = ply;
        Ok(state)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn get_piece(&self, hex: Hex) -> Option<&Piece> {
        self.board.get(&hex)
    }

    pub fn is_occupied(&self, hex: Hex) -> bool {
        self.board.contains_key(&hex)
    }

    /// Iterate tiles on the board
    pub fn pieces(&self) -> impl Iterator<Item = (Hex, Piece)> + '_ {
        self.board.iter().map(|(&hex, &piece)| (hex, piece))
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Completed rounds (two plies each)
    pub fn round(&self) -> u32 {
        self.ply / 2
    }

    /// Side to move
    pub fn current_player(&self) -> Player {
        Player::ALL[(self.ply % 2) as usize]
    }

    pub fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of `kind` tiles `player` has on the board
    pub fn placed_count(&self, player: Player, kind: TileKind) -> usize {
        self.board
            .values()
            .filter(|p| p.owner == player && p.kind == kind)
            .count()
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Apply a move for the side to move.
    ///
    /// Legality is the caller's business (use moves from `legal_moves`); only
    /// structurally impossible moves are rejected, leaving the state untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), HiveError> {
        match mv {
            Move::Place { tile, at } => {
                let owner = self.current_player();
                self.put(at, Piece { kind: tile, owner })?;
            }
            Move::Relocate { from, to } => {
                if self.board.contains_key(&to) {
                    return Err(HiveError::Occupied(to));
                }
                let piece = self.board.remove(&from).ok_or(HiveError::EmptyOrigin(from))?;
                self.board.insert(to, piece);
            }
        }
        self.ply += 1;
        Ok(())
    }

    /// Copy of this state with `mv` applied
    pub fn with_move(&self, mv: Move) -> Result<Self, HiveError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Take a tile from its owner's hand and put it on an empty cell
    fn put(&mut self, at: Hex, piece: Piece) -> Result<(), HiveError> {
        if self.board.contains_key(&at) {
            return Err(HiveError::Occupied(at));
        }
        if !self.hands[piece.owner.index()].take(piece.kind) {
            return Err(HiveError::HandExhausted {
                player: piece.owner,
                kind: piece.kind,
            });
        }
        self.board.insert(at, piece);
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
