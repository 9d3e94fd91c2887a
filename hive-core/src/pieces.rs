//! Tile kinds and their movement rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HiveError;
use crate::game::Board;
use crate::hex::{Hex, DIRECTIONS};
use crate::hive::{find_contour, trace_contour};

/// Tile kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Queen = 0,
    Spider = 1,
    Beetle = 2,
    Ant = 3,
    Grasshopper = 4,
}

/// Number of tile kinds
pub const TILE_KINDS: usize = 5;

impl TileKind {
    /// All kinds, in hand order
    pub const ALL: [TileKind; TILE_KINDS] = [
        TileKind::Queen,
        TileKind::Spider,
        TileKind::Beetle,
        TileKind::Ant,
        TileKind::Grasshopper,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// How many of this kind each player starts with
    pub fn starting_count(self) -> u8 {
        match self {
            TileKind::Queen => 1,
            TileKind::Spider => 2,
            TileKind::Beetle => 2,
            TileKind::Ant => 3,
            TileKind::Grasshopper => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileKind::Queen => "queen",
            TileKind::Spider => "spider",
            TileKind::Beetle => "beetle",
            TileKind::Ant => "ant",
            TileKind::Grasshopper => "grasshopper",
        }
    }

    /// Destinations a tile of this kind at `from` can move to, in ascending order.
    ///
    /// The tile itself must still be on `board`; it is ignored as a source of
    /// contour cells so it cannot end up touching only itself.
    pub fn destinations(self, from: Hex, board: &Board) -> Vec<Hex> {
        let mut targets: Vec<Hex> = match self {
            TileKind::Queen => trace_contour(board, from, 1).into_iter().collect(),
            TileKind::Spider => trace_contour(board, from, 3).into_iter().collect(),
            TileKind::Ant => find_contour(board, &[from]).into_iter().collect(),
            TileKind::Grasshopper => grasshopper_jumps(from, board),
            // Stacking is not modelled
            TileKind::Beetle => Vec::new(),
        };
        targets.sort_unstable();
        targets
    }
}

/// Jump in a straight line over at least one occupied cell to the first empty one
fn grasshopper_jumps(from: Hex, board: &Board) -> Vec<Hex> {
    let mut targets = Vec::new();
    for direction in DIRECTIONS {
        let mut p = from + direction;
        if !board.contains_key(&p) {
            continue;
        }
        while board.contains_key(&p) {
            p = p + direction;
        }
        targets.push(p);
    }
    targets
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileKind {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        TileKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| HiveError::UnknownTile(s.to_string()))
    }
}
