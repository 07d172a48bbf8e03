use gridpath_core::Coord;

use crate::PathFinder;
use crate::traits::AstarPather;

impl PathFinder {
    /// Compute the lowest-cost path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if `to`
    /// cannot be reached or either endpoint is outside the grid. The path is
    /// optimal as long as the pather's estimate is consistent.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        self.best_first(pather, from, to, "astar", |p| pather.estimate(p, to))
    }
}
