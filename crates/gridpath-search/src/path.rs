//! Path reconstruction and the [`Path`] result type.

use std::collections::HashMap;
use std::hash::BuildHasher;

use gridpath_core::{Coord, Grid};

use crate::neighbors::Adjacency;

/// A predecessor map: for each reached cell, the cell it was reached from.
pub trait Predecessors {
    /// The cell `c` was reached from, or `None` for the start cell and for
    /// cells that were never reached.
    fn predecessor(&self, c: Coord) -> Option<Coord>;
}

impl<S: BuildHasher> Predecessors for HashMap<Coord, Coord, S> {
    fn predecessor(&self, c: Coord) -> Option<Coord> {
        self.get(&c).copied()
    }
}

/// Walk the predecessor chain back from `end` to `start` and return the cells
/// in start-to-end order.
///
/// The walk stops after `max_len` cells, so a malformed (cyclic) map cannot
/// loop forever. Returns `None` if the chain does not reach `start` within
/// that bound.
pub fn reconstruct<P: Predecessors + ?Sized>(
    preds: &P,
    start: Coord,
    end: Coord,
    max_len: usize,
) -> Option<Vec<Coord>> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        if path.len() >= max_len {
            return None;
        }
        cur = preds.predecessor(cur)?;
        path.push(cur);
    }
    path.reverse();
    Some(path)
}

// ---------------------------------------------------------------------------
// Path
// ---------------------------------------------------------------------------

/// A route from start to end, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Coord>,
    cost: u64,
}

impl Path {
    /// Wrap `cells` and price it against `grid`: the sum of the weights of
    /// every cell after the first.
    pub fn priced(cells: Vec<Coord>, grid: &Grid) -> Self {
        let cost = cells
            .iter()
            .skip(1)
            .map(|&c| u64::from(grid.weight(c).unwrap_or(0)))
            .sum();
        Self { cells, cost }
    }

    /// Cells from start to end.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    /// Last cell.
    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Number of steps (cells minus one).
    #[inline]
    pub fn edges(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Total terrain cost, start excluded.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Whether every cell is passable in `grid` and every consecutive pair is
    /// adjacent under `adjacency`.
    pub fn is_walkable(&self, grid: &Grid, adjacency: Adjacency) -> bool {
        !self.cells.is_empty()
            && self.cells.iter().all(|&c| grid.is_passable(c))
            && self
                .cells
                .windows(2)
                .all(|w| adjacency.are_adjacent(w[0], w[1]))
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    Found(Path),
    /// The frontier ran out before reaching the end cell.
    Unreachable,
}

impl PathResult {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Found(p) => Some(p),
            PathResult::Unreachable => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
}
