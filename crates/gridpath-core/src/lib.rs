//! **gridpath-core**: grid model for the gridpath search engine.
//!
//! This crate provides the data the search algorithms run over: cell
//! coordinates, cells with obstacle flags and terrain weights, the owning
//! [`Grid`], and (with the `serde` feature) a stable snapshot schema for
//! exchanging grids with front-ends.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use cell::{Cell, DEFAULT_WEIGHT, Terrain, UnknownTerrain};
pub use error::GridError;
pub use geom::Coord;
pub use grid::{AsciiMap, Grid};
#[cfg(feature = "serde")]
pub use snapshot::{CellRecord, GridSnapshot};
