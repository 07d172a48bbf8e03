//! Errors raised while building a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Coord;

/// A grid could not be constructed from the supplied data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns.
    EmptyGrid,
    /// A row's length differs from the first row's.
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell weight was zero or negative.
    InvalidWeight { coord: Coord, weight: i64 },
    /// A cell record named a coordinate outside the grid.
    OutOfBounds { coord: Coord, rows: i32, cols: i32 },
    /// An ASCII map contained a character with no cell meaning.
    InvalidChar { ch: char, coord: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::NonRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidWeight { coord, weight } => {
                write!(f, "cell {coord} has non-positive weight {weight}")
            }
            Self::OutOfBounds { coord, rows, cols } => {
                write!(f, "cell {coord} is outside the {rows}x{cols} grid")
            }
            Self::InvalidChar { ch, coord } => {
                write!(f, "invalid map character \u{201c}{ch}\u{201d} at {coord}")
            }
        }
    }
}

impl std::error::Error for GridError {}
