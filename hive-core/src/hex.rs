//! Hex grid geometry with cube coordinates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::error::HiveError;

/// Cube hex coordinates, `x + y + z == 0`.
///
/// Deserialization rejects coordinates off the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CubeCoords")]
pub struct Hex {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        debug_assert!(x + y + z == 0);
        Self { x, y, z }
    }

    /// The six adjacent hexes, in `DIRECTIONS` order
    pub fn neighbours(self) -> [Hex; 6] {
        DIRECTIONS.map(|direction| self + direction)
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(self, direction: usize) -> Hex {
        self + DIRECTIONS[direction % 6]
    }

    /// Distance between two hexes
    pub fn distance_to(self, other: Hex) -> i32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()) / 2
    }
}

/// Unchecked wire form of a `Hex`
#[derive(Deserialize)]
struct CubeCoords {
    x: i32,
    y: i32,
    z: i32,
}

impl TryFrom<CubeCoords> for Hex {
    type Error = HiveError;

    fn try_from(c: CubeCoords) -> Result<Self, Self::Error> {
        if c.x.checked_add(c.y).and_then(|s| s.checked_add(c.z)) != Some(0) {
            return Err(HiveError::InvalidCoordinate { x: c.x, y: c.y, z: c.z });
        }
        Ok(Hex { x: c.x, y: c.y, z: c.z })
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Unit offsets to the six neighbours
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(0, -1, 1),
    Hex::new(1, -1, 0),
    Hex::new(1, 0, -1),
    Hex::new(0, 1, -1),
    Hex::new(-1, 1, 0),
    Hex::new(-1, 0, 1),
];

/// Cube hex neighbours of `c`
pub fn neighbours(c: Hex) -> [Hex; 6] {
    c.neighbours()
}

pub fn add(c1: Hex, c2: Hex) -> Hex {
    c1 + c2
}
