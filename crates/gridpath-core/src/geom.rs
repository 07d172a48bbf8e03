//! Geometry primitive: [`Coord`].
//!
//! Cells are addressed by `(row, col)`. Rows grow downward and columns grow
//! to the right, so `Coord::new(0, 0)` is the top-left cell.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate, or an offset between two cells.
///
/// Identity is by value: two `Coord`s naming the same row and column are the
/// same cell, no matter where they came from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the coordinate lies in `[0, rows) × [0, cols)`.
    #[inline]
    pub const fn in_bounds(self, rows: i32, cols: i32) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < rows && self.col < cols
    }

    /// Whether `other` is one step away under 4-way movement.
    #[inline]
    pub fn is_cardinal_neighbor(self, other: Coord) -> bool {
        let d = other - self;
        d.row.abs() + d.col.abs() == 1
    }

    /// Whether `other` is one step away under 8-way movement.
    #[inline]
    pub fn is_neighbor(self, other: Coord) -> bool {
        let d = other - self;
        self != other && d.row.abs() <= 1 && d.col.abs() <= 1
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 5);
        assert_eq!(a + b, Coord::new(4, 7));
        assert_eq!(b - a, Coord::new(2, 3));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn coord_bounds() {
        assert!(Coord::new(0, 0).in_bounds(3, 4));
        assert!(Coord::new(2, 3).in_bounds(3, 4));
        assert!(!Coord::new(3, 0).in_bounds(3, 4));
        assert!(!Coord::new(0, -1).in_bounds(3, 4));
    }

    #[test]
    fn coord_row_major_order() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn neighbor_tests() {
        let c = Coord::new(2, 2);
        assert!(c.is_cardinal_neighbor(Coord::new(1, 2)));
        assert!(!c.is_cardinal_neighbor(Coord::new(1, 1)));
        assert!(c.is_neighbor(Coord::new(1, 1)));
        assert!(!c.is_neighbor(c));
        assert!(!c.is_neighbor(Coord::new(4, 2)));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(4, 7).to_string(), "(4, 7)");
    }
}
