use gridpath_core::Coord;

use crate::PathFinder;
use crate::finder::NO_PARENT;
use crate::path::reconstruct;
use crate::traits::Pather;

impl PathFinder {
    /// Compute a path with the fewest steps from `from` to `to` using
    /// breadth-first search. Step costs are ignored.
    ///
    /// Returns the full path (including both endpoints) or `None` if `to`
    /// cannot be reached or either endpoint is outside the grid. Among
    /// several shortest paths, the one found first in neighbor enumeration
    /// order wins.
    pub fn bfs_path<P: Pather>(&mut self, pather: &P, from: Coord, to: Coord) -> Option<Vec<Coord>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        self.trace.clear();
        self.stale_pops = 0;
        let cur_gen = self.next_generation();

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        let mut queue = std::mem::take(&mut self.queue);
        queue.clear();
        queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search false;
            };

            let cp = self.coord(ci);
            self.trace.push(cp);

            if ci == goal_idx {
                break 'search true;
            }

            let hops = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                // Marked on discovery: with unit steps the first route to a
                // cell is a shortest one.
                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    continue;
                }
                n.generation = cur_gen;
                n.g = hops + 1;
                n.f = n.g;
                n.parent = ci;
                n.closed = false;
                queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        self.queue = queue;

        log::debug!(
            "bfs {from} -> {to}: {} expanded, found={found}",
            self.trace.len()
        );

        if !found {
            return None;
        }
        reconstruct(self, from, to, self.cell_count())
    }
}
