//! Serializable grid snapshots.
//!
//! A [`GridSnapshot`] is the stable exchange form of a grid plus its start and
//! end markers. Only cells that differ from the default (open, weight 1) need
//! to be listed:
//!
//! ```json
//! {
//!   "rows": 5, "cols": 5,
//!   "cells": [
//!     { "row": 0, "col": 2, "blocked": true },
//!     { "row": 3, "col": 1, "weight": 5 },
//!     { "row": 3, "col": 2, "terrain": "mountain" }
//!   ],
//!   "start": { "row": 0, "col": 0 },
//!   "end": { "row": 4, "col": 4 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, DEFAULT_WEIGHT, Terrain};
use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

/// One listed cell.
///
/// `weight` takes precedence over `terrain`; with neither, the weight is 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub row: i32,
    pub col: i32,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<Terrain>,
}

impl CellRecord {
    fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    fn resolve(&self) -> Result<Cell, GridError> {
        let weight = match (self.weight, self.terrain) {
            (Some(w), _) => w,
            (None, Some(t)) => i64::from(t.weight()),
            (None, None) => i64::from(DEFAULT_WEIGHT),
        };
        let weight = u32::try_from(weight)
            .ok()
            .filter(|&w| w > 0)
            .ok_or(GridError::InvalidWeight {
                coord: self.coord(),
                weight,
            })?;
        Ok(Cell {
            blocked: self.blocked,
            weight,
        })
    }
}

/// A grid with optional start / end markers, in exchange form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: i32,
    pub cols: i32,
    #[serde(default)]
    pub cells: Vec<CellRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Coord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Coord>,
}

impl GridSnapshot {
    /// Capture `grid` and its markers. Default cells are omitted; weights
    /// matching a named terrain are written as that terrain.
    pub fn from_grid(grid: &Grid, start: Option<Coord>, end: Option<Coord>) -> Self {
        let cells = grid
            .iter()
            .filter(|&(_, cell)| cell != Cell::default())
            .map(|(c, cell)| {
                let terrain = Terrain::from_weight(cell.weight);
                CellRecord {
                    row: c.row,
                    col: c.col,
                    blocked: cell.blocked,
                    weight: match terrain {
                        Some(_) => None,
                        None => Some(i64::from(cell.weight)),
                    },
                    terrain: terrain.filter(|&t| t != Terrain::Normal),
                }
            })
            .collect();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
            start,
            end,
        }
    }

    /// Build the grid described by this snapshot.
    ///
    /// Later records for the same coordinate override earlier ones.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut grid = Grid::new(self.rows, self.cols);
        for rec in &self.cells {
            let coord = rec.coord();
            if !grid.contains(coord) {
                return Err(GridError::OutOfBounds {
                    coord,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            grid.set(coord, rec.resolve()?);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_documented_example() {
        let json = r#"{
            "rows": 5, "cols": 5,
            "cells": [
                { "row": 0, "col": 2, "blocked": true },
                { "row": 3, "col": 1, "weight": 5 },
                { "row": 3, "col": 2, "terrain": "mountain" }
            ],
            "start": { "row": 0, "col": 0 },
            "end": { "row": 4, "col": 4 }
        }"#;
        let snap: GridSnapshot = serde_json::from_str(json).unwrap();
        let grid = snap.to_grid().unwrap();
        assert!(!grid.is_passable(Coord::new(0, 2)));
        assert_eq!(grid.weight(Coord::new(3, 1)), Some(5));
        assert_eq!(grid.weight(Coord::new(3, 2)), Some(10));
        assert_eq!(grid.weight(Coord::new(4, 4)), Some(1));
        assert_eq!(snap.start, Some(Coord::new(0, 0)));
        assert_eq!(snap.end, Some(Coord::new(4, 4)));
    }

    #[test]
    fn grid_survives_json() {
        let map = Grid::parse("S.#\n7wE").unwrap();
        let snap = GridSnapshot::from_grid(&map.grid, map.start, map.end);
        let json = serde_json::to_string(&snap).unwrap();
        let back: GridSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_grid().unwrap(), map.grid);
        assert_eq!(back.start, map.start);
        assert_eq!(back.end, map.end);
    }

    #[test]
    fn default_cells_are_omitted() {
        let map = Grid::parse("...\n.#.").unwrap();
        let snap = GridSnapshot::from_grid(&map.grid, None, None);
        assert_eq!(snap.cells.len(), 1);
        assert_eq!(snap.cells[0].row, 1);
        assert!(snap.cells[0].blocked);
        assert_eq!(snap.cells[0].weight, None);
        assert_eq!(snap.cells[0].terrain, None);
    }

    #[test]
    fn rejects_negative_weight() {
        let json = r#"{"rows":2,"cols":2,"cells":[{"row":1,"col":1,"weight":-4}]}"#;
        let snap: GridSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(
            snap.to_grid(),
            Err(GridError::InvalidWeight {
                coord: Coord::new(1, 1),
                weight: -4
            })
        );
    }

    #[test]
    fn rejects_out_of_bounds_record() {
        let json = r#"{"rows":2,"cols":2,"cells":[{"row":2,"col":0,"blocked":true}]}"#;
        let snap: GridSnapshot = serde_json::from_str(json).unwrap();
        assert!(matches!(
            snap.to_grid(),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_empty() {
        let snap = GridSnapshot {
            rows: 0,
            cols: 3,
            cells: Vec::new(),
            start: None,
            end: None,
        };
        assert_eq!(snap.to_grid(), Err(GridError::EmptyGrid));
    }

    #[test]
    fn later_records_win() {
        let json = r#"{"rows":1,"cols":1,"cells":[
            {"row":0,"col":0,"blocked":true},
            {"row":0,"col":0,"terrain":"grass"}
        ]}"#;
        let snap: GridSnapshot = serde_json::from_str(json).unwrap();
        let grid = snap.to_grid().unwrap();
        assert_eq!(grid.at(Coord::ZERO), Some(Cell::weighted(2)));
    }
}
