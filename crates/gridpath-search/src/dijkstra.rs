use gridpath_core::Coord;

use crate::PathFinder;
use crate::finder::NO_PARENT;
use crate::path::reconstruct;
use crate::traits::WeightedPather;

impl PathFinder {
    /// Compute the lowest-cost path from `from` to `to` using Dijkstra's
    /// algorithm.
    ///
    /// Returns the full path (including both endpoints) or `None` if `to`
    /// cannot be reached or either endpoint is outside the grid.
    pub fn dijkstra_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        self.best_first(pather, from, to, "dijkstra", |_| 0)
    }

    /// Best-first search shared by Dijkstra and A*.
    ///
    /// Frontier keys are `g + estimate(cell)`. Cells are closed when popped,
    /// and popped entries for closed cells are stale and skipped. A neighbor
    /// is re-pushed only when its `g` strictly improves. `estimate` must be
    /// consistent for the first expansion of a cell to be final.
    pub(crate) fn best_first<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
        label: &str,
        estimate: impl Fn(Coord) -> u64,
    ) -> Option<Vec<Coord>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        self.trace.clear();
        self.stale_pops = 0;
        let cur_gen = self.next_generation();

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = estimate(from);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut open = std::mem::take(&mut self.frontier);
        open.clear();
        open.push(start_idx, self.nodes[start_idx].f);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((ci, key)) = open.pop() else {
                break 'search false;
            };

            if self.nodes[ci].closed {
                self.stale_pops += 1;
                log::trace!("{label}: stale entry for {} (key {key})", self.coord(ci));
                continue;
            }
            self.nodes[ci].closed = true;

            let cp = self.coord(ci);
            self.trace.push(cp);

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + u64::from(pather.cost(cp, np));

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative;
                n.f = tentative + estimate(np);
                n.parent = ci;
                open.push(ni, n.f);
            }
        };

        open.clear();
        self.frontier = open;
        self.nbuf = nbuf;

        log::debug!(
            "{label} {from} -> {to}: {} expanded, {} stale, found={found}",
            self.trace.len(),
            self.stale_pops
        );

        if !found {
            return None;
        }
        reconstruct(self, from, to, self.cell_count())
    }
}
