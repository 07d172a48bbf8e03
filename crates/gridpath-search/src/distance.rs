use gridpath_core::Coord;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> u32 {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}
