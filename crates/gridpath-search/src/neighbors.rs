//! Adjacency modes and neighbor enumeration.

use std::fmt;
use std::str::FromStr;

use gridpath_core::Coord;

use crate::distance::{chebyshev, manhattan};

/// Step offsets in enumeration order: up, down, left, right, then the
/// diagonals up-left, up-right, down-left, down-right.
const OFFSETS: [Coord; 8] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(-1, -1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
    Coord::new(1, 1),
];

/// Which cells count as one step away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Adjacency {
    /// Cardinal moves only.
    #[default]
    Four,
    /// Cardinal and diagonal moves.
    Eight,
}

impl Adjacency {
    /// Step offsets for this mode, in enumeration order.
    #[inline]
    pub fn offsets(self) -> &'static [Coord] {
        match self {
            Adjacency::Four => &OFFSETS[..4],
            Adjacency::Eight => &OFFSETS,
        }
    }

    /// Append the neighbors of `p` for which `keep` returns `true`.
    pub fn neighbors(self, p: Coord, keep: impl Fn(Coord) -> bool, buf: &mut Vec<Coord>) {
        for &d in self.offsets() {
            let n = p + d;
            if keep(n) {
                buf.push(n);
            }
        }
    }

    /// Whether `a` and `b` are one step apart.
    #[inline]
    pub fn are_adjacent(self, a: Coord, b: Coord) -> bool {
        match self {
            Adjacency::Four => a.is_cardinal_neighbor(b),
            Adjacency::Eight => a.is_neighbor(b),
        }
    }

    /// Minimum number of steps between `a` and `b` on an open grid:
    /// Manhattan for 4-way, Chebyshev for 8-way.
    #[inline]
    pub fn distance(self, a: Coord, b: Coord) -> u32 {
        match self {
            Adjacency::Four => manhattan(a, b),
            Adjacency::Eight => chebyshev(a, b),
        }
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjacency::Four => f.write_str("4-way"),
            Adjacency::Eight => f.write_str("8-way"),
        }
    }
}

impl FromStr for Adjacency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4" | "4-way" | "four" | "cardinal" => Ok(Adjacency::Four),
            "8" | "8-way" | "eight" | "diagonal" => Ok(Adjacency::Eight),
            other => Err(format!("unknown adjacency \u{201c}{other}\u{201d} (expected 4 or 8)")),
        }
    }
}
