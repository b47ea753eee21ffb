//! Movement actions for grid worlds.
//!
//! A `Direction` is the "verb" an actor applies on its turn. The search core
//! never interprets actions; it only stores them on nodes and compares them.
//! Grid games use `Direction` as their action type.

use serde::{Deserialize, Serialize};

/// A single-cell move (or staying put) on a grid.
///
/// The declaration order is the canonical enumeration order used by grid
/// games when listing legal actions and when breaking ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Stop,
    ];

    /// The four moving directions (everything but `Stop`).
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row/column offset of this move. North decreases the row.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::Stop => (0, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        };
        f.write_str(name)
    }
}
