//! Engine errors

use thiserror::Error;

use crate::game::Player;
use crate::hex::Hex;
use crate::pieces::TileKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HiveError {
    #[error("{player} has no {kind} left in hand")]
    HandExhausted { player: Player, kind: TileKind },

    #[error("cell {0} is already occupied")]
    Occupied(Hex),

    #[error("no tile to move at {0}")]
    EmptyOrigin(Hex),

    #[error("unknown tile kind: {0:?}")]
    UnknownTile(String),

    #[error("coordinates {x},{y},{z} do not sum to zero")]
    InvalidCoordinate { x: i32, y: i32, z: i32 },
}
