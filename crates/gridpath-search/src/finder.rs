use std::collections::VecDeque;

use gridpath_core::{Coord, Grid};

use crate::frontier::Frontier;
use crate::path::Predecessors;

/// Parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell search state
// ---------------------------------------------------------------------------

/// Search state of one cell.
///
/// A node whose `generation` differs from the finder's current generation has
/// not been reached by the running search: its `g` and `f` are implicitly
/// infinite and it has no parent.
#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from the start (hop count for BFS).
    pub(crate) g: u64,
    /// Frontier key: `g` plus the heuristic estimate.
    pub(crate) f: u64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Expansion committed (Dijkstra / A*).
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Owner of the scratch state for searches on a `rows × cols` grid.
///
/// Each search bumps a generation counter instead of clearing the node
/// array, so repeated queries reuse their allocations. A `PathFinder` runs one
/// search at a time; use separate instances to search concurrently.
#[derive(Clone)]
pub struct PathFinder {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    /// Cells in the order the last search expanded them.
    pub(crate) trace: Vec<Coord>,
    pub(crate) stale_pops: usize,
    pub(crate) frontier: Frontier<usize>,
    pub(crate) queue: VecDeque<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
}

impl PathFinder {
    /// Create a finder for a grid of the given dimensions.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            nodes: vec![Node::default(); rows as usize * cols as usize],
            generation: 0,
            trace: Vec::new(),
            stale_pops: 0,
            frontier: Frontier::new(),
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a finder sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    /// Change the dimensions, reallocating only if the node array must grow.
    pub fn resize(&mut self, rows: i32, cols: i32) {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let new_len = rows as usize * cols as usize;
        self.rows = rows;
        self.cols = cols;
        self.trace.clear();

        if new_len <= self.nodes.len() {
            // Stale nodes are ignored once the generation moves on.
            self.next_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Dimensions as `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// Cells expanded by the last search, in expansion order.
    ///
    /// For BFS a cell is expanded when it leaves the queue; for Dijkstra and
    /// A* when its cheapest entry leaves the frontier. Stale frontier entries
    /// do not appear.
    pub fn expansion_order(&self) -> &[Coord] {
        &self.trace
    }

    /// Frontier entries the last weighted search discarded as stale.
    pub fn stale_pops(&self) -> usize {
        self.stale_pops
    }

    /// Best cost found for `p` by the last search: hop count for BFS,
    /// accumulated weight for Dijkstra and A*. `None` if `p` was not reached.
    pub fn cost_at(&self, p: Coord) -> Option<u64> {
        let n = &self.nodes[self.idx(p)?];
        (n.generation == self.generation && self.generation != 0).then_some(n.g)
    }

    /// Advance to a fresh generation, resetting all nodes when the counter
    /// wraps so that no node is mistaken for a current one.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> Option<usize> {
        if !p.in_bounds(self.rows, self.cols) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Number of addressable cells.
    #[inline]
    pub(crate) fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Predecessors for PathFinder {
    fn predecessor(&self, c: Coord) -> Option<Coord> {
        let n = &self.nodes[self.idx(c)?];
        if n.generation != self.generation || n.parent == NO_PARENT {
            return None;
        }
        Some(self.coord(n.parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_smaller_preserves_capacity() {
        let mut pf = PathFinder::new(20, 20);
        let original_cap = pf.nodes.len(); // 400

        // Shrinking keeps the allocation.
        pf.resize(5, 5);
        assert_eq!(pf.dims(), (5, 5));
        assert_eq!(pf.nodes.len(), original_cap);
        assert_eq!(pf.cell_count(), 25);
        // Generation bumped so stale nodes are ignored.
        assert!(pf.generation > 0);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut pf = PathFinder::new(5, 5);
        pf.resize(20, 20);
        assert_eq!(pf.dims(), (20, 20));
        assert_eq!(pf.nodes.len(), 400);
        assert_eq!(pf.generation, 0);
    }

    #[test]
    fn idx_round_trip() {
        let pf = PathFinder::new(3, 7);
        for r in 0..3 {
            for c in 0..7 {
                let p = Coord::new(r, c);
                assert_eq!(pf.coord(pf.idx(p).unwrap()), p);
            }
        }
        assert_eq!(pf.idx(Coord::new(3, 0)), None);
        assert_eq!(pf.idx(Coord::new(0, -1)), None);
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let mut pf = PathFinder::new(2, 2);
        pf.generation = u32::MAX;
        pf.nodes[0].generation = 1;
        assert_eq!(pf.next_generation(), 1);
        assert!(pf.nodes.iter().all(|n| n.generation == 0));
    }

    #[test]
    fn fresh_finder_reports_nothing() {
        let pf = PathFinder::new(4, 4);
        assert_eq!(pf.cost_at(Coord::new(1, 1)), None);
        assert_eq!(pf.predecessor(Coord::new(1, 1)), None);
        assert!(pf.expansion_order().is_empty());
    }
}
