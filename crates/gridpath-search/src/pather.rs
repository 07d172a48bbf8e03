//! [`GridPather`]: the trait hierarchy implemented over a [`Grid`].

use gridpath_core::{Coord, Grid};

use crate::neighbors::Adjacency;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Searches a [`Grid`] with a fixed adjacency mode.
///
/// - neighbors: in-bounds, non-blocked cells one step away;
/// - cost: weight of the destination cell;
/// - estimate: Manhattan (4-way) or Chebyshev (8-way) distance times the
///   grid's smallest passable weight. Every step costs at least that weight,
///   so the estimate is admissible and consistent.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    adjacency: Adjacency,
    min_weight: u64,
}

impl<'a> GridPather<'a> {
    /// Create a pather over `grid`.
    pub fn new(grid: &'a Grid, adjacency: Adjacency) -> Self {
        Self {
            grid,
            adjacency,
            min_weight: u64::from(grid.min_weight()),
        }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The adjacency mode.
    #[inline]
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        self.adjacency
            .neighbors(p, |n| self.grid.is_passable(n), buf);
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _from: Coord, to: Coord) -> u32 {
        self.grid.weight(to).unwrap_or(u32::MAX)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Coord, to: Coord) -> u64 {
        u64::from(self.adjacency.distance(from, to)) * self.min_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_skip_blocked_and_out_of_bounds() {
        let map = Grid::parse("#.\n..").unwrap();
        let pather = GridPather::new(&map.grid, Adjacency::Eight);
        let mut buf = Vec::new();
        pather.neighbors(Coord::new(1, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 1), Coord::new(0, 1)]);
    }

    #[test]
    fn cost_is_destination_weight() {
        let map = Grid::parse("1m\nw.").unwrap();
        let pather = GridPather::new(&map.grid, Adjacency::Four);
        assert_eq!(pather.cost(Coord::new(0, 0), Coord::new(0, 1)), 10);
        assert_eq!(pather.cost(Coord::new(0, 1), Coord::new(0, 0)), 1);
        assert_eq!(pather.cost(Coord::new(1, 1), Coord::new(1, 0)), 5);
    }

    #[test]
    fn estimate_follows_adjacency_and_min_weight() {
        let map = Grid::parse("22222\n22222\n2222#").unwrap();
        let four = GridPather::new(&map.grid, Adjacency::Four);
        let eight = GridPather::new(&map.grid, Adjacency::Eight);
        let (a, b) = (Coord::new(0, 0), Coord::new(2, 3));
        assert_eq!(four.estimate(a, b), 10);
        assert_eq!(eight.estimate(a, b), 6);
    }
}
