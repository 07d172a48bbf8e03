//! Random grid generators.
//!
//! - **Obstacle scatter**: each cell becomes an obstacle with a fixed
//!   probability.
//! - **Terrain patches**: drunk walks that paint weighted terrain, giving
//!   blobs of grass, water and mountains rather than noise.

use gridpath_core::{Coord, Grid, Terrain};
use rand::{Rng, SeedableRng};

/// Settings for [`MapGen::generate`].
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub rows: i32,
    pub cols: i32,
    /// Probability (0.0–1.0) that a cell is an obstacle.
    pub obstacle_density: f64,
    /// Number of terrain patches to paint.
    pub patches: usize,
    /// Random-walk steps per patch.
    pub patch_steps: usize,
    /// Terrains to choose from for each patch.
    pub terrains: Vec<Terrain>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            obstacle_density: 0.2,
            patches: 6,
            patch_steps: 25,
            terrains: vec![Terrain::Grass, Terrain::Water, Terrain::Mountain],
        }
    }
}

/// A generated grid with start and end cells.
///
/// `start` and `end` are open cells, or `None` when the grid had no room
/// for them.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

/// Map generator operating on a [`Grid`].
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl MapGen<rand::rngs::StdRng> {
    /// A generator over an open `rows × cols` grid, seeded for
    /// reproducible output.
    pub fn seeded(rows: i32, cols: i32, seed: u64) -> Self {
        Self::with_grid(Grid::new(rows, cols), rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MapGen<R> {
    /// Create a new MapGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Block each cell with probability `density` (clamped to 0.0–1.0; NaN
    /// counts as 0.0).
    ///
    /// Returns the number of newly blocked cells.
    pub fn scatter_obstacles(&mut self, density: f64) -> usize {
        if density.is_nan() {
            return 0;
        }
        let density = density.clamp(0.0, 1.0);
        let mut blocked = 0;
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let p = Coord::new(r, c);
                if self.rng.random_bool(density) && self.grid.is_passable(p) {
                    self.grid.set_blocked(p, true);
                    blocked += 1;
                }
            }
        }
        blocked
    }

    /// Paint `terrain` along a random walk of `steps` steps from a random
    /// cell. Obstacle flags are left alone.
    ///
    /// Returns the number of cells whose weight changed.
    pub fn terrain_patch(&mut self, terrain: Terrain, steps: usize) -> usize {
        if self.grid.is_empty() {
            return 0;
        }
        let mut pos = Coord::new(
            self.rng.random_range(0..self.grid.rows()),
            self.rng.random_range(0..self.grid.cols()),
        );
        let mut painted = 0;
        for _ in 0..steps {
            if self.grid.weight(pos) != Some(terrain.weight()) {
                self.grid.set_terrain(pos, terrain);
                painted += 1;
            }
            let next = match self.rng.random_range(0..4u32) {
                0 => pos.shift(-1, 0),
                1 => pos.shift(1, 0),
                2 => pos.shift(0, -1),
                _ => pos.shift(0, 1),
            };
            // Stay put at the edges.
            if self.grid.contains(next) {
                pos = next;
            }
        }
        painted
    }

    /// A uniformly chosen open cell, or `None` if every cell is blocked.
    pub fn open_cell(&mut self) -> Option<Coord> {
        let open: Vec<Coord> = self
            .grid
            .iter()
            .filter(|(_, cell)| cell.is_passable())
            .map(|(c, _)| c)
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }

    /// Fill the grid per `config` and place distinct start and end cells.
    ///
    /// The grid is replaced by a fresh `config.rows × config.cols` one.
    pub fn generate(&mut self, config: &ScatterConfig) -> Scenario {
        self.grid = Grid::new(config.rows, config.cols);

        if !config.terrains.is_empty() {
            for _ in 0..config.patches {
                let t = config.terrains[self.rng.random_range(0..config.terrains.len())];
                self.terrain_patch(t, config.patch_steps);
            }
        }
        let blocked = self.scatter_obstacles(config.obstacle_density);

        let start = self.open_cell();
        if let Some(s) = start {
            // Reserve the start so the end lands elsewhere.
            self.grid.set_blocked(s, true);
        }
        let end = self.open_cell();
        if let Some(s) = start {
            self.grid.set_blocked(s, false);
        }

        log::debug!(
            "generated {}x{} grid: {blocked} obstacles, start={start:?}, end={end:?}",
            config.rows,
            config.cols
        );

        Scenario {
            grid: self.grid.clone(),
            start,
            end,
        }
    }

    /// Number of blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.grid.iter().filter(|(_, c)| c.blocked).count()
    }
}
