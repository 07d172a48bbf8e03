use gridpath_core::Coord;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`. The caller
    /// clears `buf` before calling. Blocked cells must not be appended.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Coord, to: Coord) -> u32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> u64;
}
