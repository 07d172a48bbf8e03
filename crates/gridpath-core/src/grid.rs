//! The [`Grid`] type: a fixed-size 2D array of [`Cell`]s.
//!
//! A `Grid` owns its cells in row-major order. Searches borrow it immutably,
//! so it cannot change while one is running; between searches it can be
//! edited freely.

use std::fmt;

use crate::cell::{Cell, Terrain};
use crate::error::GridError;
use crate::geom::Coord;

/// A rectangular grid of cells addressed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new grid of open, weight-1 cells. Negative dimensions are
    /// clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, Cell::default())
    }

    /// Create a new grid with every cell set to `cell`. A zero weight is
    /// raised to 1, as in [`Grid::set`].
    pub fn filled(rows: i32, cols: i32, cell: Cell) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let cell = cell.with_weight(cell.weight.max(1));
        Self {
            cells: vec![cell; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    /// Build a grid from row vectors, validating shape and weights.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || expected == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::NonRectangular {
                    row: r,
                    expected,
                    found: row.len(),
                });
            }
            for (c, cell) in row.into_iter().enumerate() {
                if cell.weight == 0 {
                    return Err(GridError::InvalidWeight {
                        coord: Coord::new(r as i32, c as i32),
                        weight: 0,
                    });
                }
                cells.push(cell);
            }
        }
        let cols = expected as i32;
        let rows = (cells.len() / expected) as i32;
        Ok(Self { cells, rows, cols })
    }

    /// Parse a textual map.
    ///
    /// | char | meaning |
    /// |---|---|
    /// | `.` | open, weight 1 |
    /// | `#` | blocked |
    /// | `1`–`9` | open, that weight |
    /// | `g` `w` `m` | grass, water, mountain |
    /// | `S` `E` | start / end marker on an open weight-1 cell |
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(s: &str) -> Result<AsciiMap, GridError> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut end = None;
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let r = rows.len() as i32;
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let coord = Coord::new(r, c as i32);
                let cell = match ch {
                    '.' => Cell::OPEN,
                    '#' => Cell::WALL,
                    'g' => Terrain::Grass.into(),
                    'w' => Terrain::Water.into(),
                    'm' => Terrain::Mountain.into(),
                    'S' => {
                        start = Some(coord);
                        Cell::OPEN
                    }
                    'E' => {
                        end = Some(coord);
                        Cell::OPEN
                    }
                    '1'..='9' => Cell::weighted(ch as u32 - '0' as u32),
                    _ => return Err(GridError::InvalidChar { ch, coord }),
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Ok(AsciiMap {
            grid: Self::from_rows(rows)?,
            start,
            end,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.in_bounds(self.rows, self.cols)
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// The coordinate of flat index `idx`.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and not blocked.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_passable)
    }

    /// Traversal weight of `c`, or `None` if out of bounds.
    #[inline]
    pub fn weight(&self, c: Coord) -> Option<u32> {
        self.at(c).map(|cell| cell.weight)
    }

    /// Replace the cell at `c`. Does nothing if out of bounds. A zero weight
    /// is raised to 1.
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(i) = self.index(c) {
            self.cells[i] = cell.with_weight(cell.weight.max(1));
        }
    }

    /// Set or clear the obstacle flag at `c`.
    pub fn set_blocked(&mut self, c: Coord, blocked: bool) {
        if let Some(i) = self.index(c) {
            self.cells[i].blocked = blocked;
        }
    }

    /// Flip the obstacle flag at `c`, returning the new value.
    pub fn toggle_blocked(&mut self, c: Coord) -> Option<bool> {
        let i = self.index(c)?;
        let cell = &mut self.cells[i];
        cell.blocked = !cell.blocked;
        Some(cell.blocked)
    }

    /// Set the weight at `c`.
    pub fn set_weight(&mut self, c: Coord, weight: u32) -> Result<(), GridError> {
        if weight == 0 {
            return Err(GridError::InvalidWeight {
                coord: c,
                weight: 0,
            });
        }
        let rows = self.rows;
        let cols = self.cols;
        let i = self
            .index(c)
            .ok_or(GridError::OutOfBounds { coord: c, rows, cols })?;
        self.cells[i].weight = weight;
        Ok(())
    }

    /// Paint terrain at `c`, keeping its obstacle flag.
    pub fn set_terrain(&mut self, c: Coord, terrain: Terrain) {
        if let Some(i) = self.index(c) {
            self.cells[i].weight = terrain.weight();
        }
    }

    /// Reset every cell to open, weight 1.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Smallest weight among passable cells, or 1 if there are none.
    pub fn min_weight(&self) -> u32 {
        self.cells
            .iter()
            .filter(|c| c.is_passable())
            .map(|c| c.weight)
            .min()
            .unwrap_or(1)
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord(i), cell))
    }
}

impl fmt::Display for Grid {
    /// Render in the format accepted by [`Grid::parse`] (without markers).
    ///
    /// Lossy for weights above 10: they print as `+`, which `parse`
    /// rejects. Use a snapshot to keep such grids exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let cell = self.cells[(r * self.cols + c) as usize];
                let ch = if cell.blocked {
                    '#'
                } else {
                    match cell.weight {
                        1 => '.',
                        w @ 2..=9 => char::from_digit(w, 10).unwrap_or('?'),
                        10 => 'm',
                        _ => '+',
                    }
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A parsed textual map: the grid plus optional start / end markers.
#[derive(Debug, Clone)]
pub struct AsciiMap {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.at(Coord::new(0, 0)), Some(Cell::default()));
        assert_eq!(g.at(Coord::new(3, 0)), None);
    }

    #[test]
    fn negative_dimensions_clamp() {
        let g = Grid::new(-2, 5);
        assert!(g.is_empty());
        assert!(!g.contains(Coord::ZERO));
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(3, 4);
        for (c, _) in g.iter() {
            let i = g.index(c).unwrap();
            assert_eq!(g.coord(i), c);
        }
        assert_eq!(g.index(Coord::new(1, 2)), Some(6));
    }

    #[test]
    fn set_and_toggle() {
        let mut g = Grid::new(2, 2);
        let c = Coord::new(1, 0);
        g.set_blocked(c, true);
        assert!(!g.is_passable(c));
        assert_eq!(g.toggle_blocked(c), Some(false));
        assert!(g.is_passable(c));
        g.set_terrain(c, Terrain::Water);
        assert_eq!(g.weight(c), Some(5));
        // Out of bounds is ignored.
        g.set(Coord::new(9, 9), Cell::WALL);
        assert_eq!(g.toggle_blocked(Coord::new(-1, 0)), None);
    }

    #[test]
    fn set_weight_validates() {
        let mut g = Grid::new(2, 2);
        assert!(g.set_weight(Coord::new(0, 1), 4).is_ok());
        assert_eq!(g.weight(Coord::new(0, 1)), Some(4));
        assert!(matches!(
            g.set_weight(Coord::new(0, 1), 0),
            Err(GridError::InvalidWeight { .. })
        ));
        assert!(matches!(
            g.set_weight(Coord::new(5, 1), 2),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn set_raises_zero_weight() {
        let mut g = Grid::new(1, 1);
        g.set(Coord::ZERO, Cell::weighted(0));
        assert_eq!(g.weight(Coord::ZERO), Some(1));
    }

    #[test]
    fn filled_raises_zero_weight() {
        let g = Grid::filled(2, 2, Cell::weighted(0));
        assert_eq!(g.weight(Coord::ZERO), Some(1));
        assert_eq!(g.min_weight(), 1);
        let walls = Grid::filled(1, 2, Cell::weighted(0).with_blocked(true));
        assert_eq!(walls.at(Coord::new(0, 1)), Some(Cell::WALL));
    }

    #[test]
    fn clear_resets() {
        let mut g = Grid::new(2, 2);
        g.set(Coord::new(1, 1), Cell::WALL);
        g.set_terrain(Coord::new(0, 0), Terrain::Mountain);
        g.clear();
        assert!(g.iter().all(|(_, c)| c == Cell::default()));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![Cell::OPEN; 3], vec![Cell::OPEN; 2]];
        assert_eq!(
            Grid::from_rows(rows),
            Err(GridError::NonRectangular {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(Grid::from_rows(Vec::new()), Err(GridError::EmptyGrid));
    }

    #[test]
    fn from_rows_rejects_zero_weight() {
        let rows = vec![vec![Cell::OPEN, Cell::weighted(0)]];
        assert!(matches!(
            Grid::from_rows(rows),
            Err(GridError::InvalidWeight { weight: 0, .. })
        ));
    }

    #[test]
    fn parse_map() {
        let map = Grid::parse(
            "
            S.#
            g5E
            ",
        )
        .unwrap();
        assert_eq!(map.grid.rows(), 2);
        assert_eq!(map.grid.cols(), 3);
        assert_eq!(map.start, Some(Coord::new(0, 0)));
        assert_eq!(map.end, Some(Coord::new(1, 2)));
        assert!(!map.grid.is_passable(Coord::new(0, 2)));
        assert_eq!(map.grid.weight(Coord::new(1, 0)), Some(2));
        assert_eq!(map.grid.weight(Coord::new(1, 1)), Some(5));
    }

    #[test]
    fn parse_rejects_unknown_char() {
        assert_eq!(
            Grid::parse("..\n.?").unwrap_err(),
            GridError::InvalidChar {
                ch: '?',
                coord: Coord::new(1, 1)
            }
        );
    }

    #[test]
    fn display_matches_parse() {
        let src = "..#\n2.m\n";
        let map = Grid::parse(src).unwrap();
        assert_eq!(map.grid.to_string(), src);
    }

    #[test]
    fn display_marks_heavy_weights_unparseable() {
        let mut g = Grid::new(1, 2);
        g.set_weight(Coord::new(0, 1), 12).unwrap();
        assert_eq!(g.to_string(), ".+\n");
        assert!(matches!(
            Grid::parse(&g.to_string()),
            Err(GridError::InvalidChar { ch: '+', .. })
        ));
    }

    #[test]
    fn min_weight_ignores_blocked() {
        let map = Grid::parse("#3\n45").unwrap();
        assert_eq!(map.grid.min_weight(), 3);
        assert_eq!(Grid::filled(2, 2, Cell::WALL).min_weight(), 1);
    }
}
