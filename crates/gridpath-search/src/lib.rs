//! Shortest-path search on weighted grids.
//!
//! This crate finds routes between two cells of a
//! [`gridpath_core::Grid`] with one of three strategies:
//!
//! - **BFS**: fewest steps, weights ignored ([`PathFinder::bfs_path`])
//! - **Dijkstra**: lowest total weight ([`PathFinder::dijkstra_path`])
//! - **A\***: lowest total weight, guided by a distance estimate
//!   ([`PathFinder::astar_path`])
//!
//! Movement is 4-way or 8-way ([`Adjacency`]). Stepping into a cell costs its
//! weight. The high-level entry point is [`search`] (or [`PathFinder::run`]),
//! which validates a [`SearchRequest`] and returns a [`SearchReport`] holding
//! the [`PathResult`] and the expansion order for replay.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`GridPather`] implements all three over a grid.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod error;
mod finder;
mod frontier;
mod neighbors;
mod path;
mod pather;
mod report;
mod request;
mod traits;

pub use distance::{chebyshev, manhattan};
pub use error::{Endpoint, EndpointIssue, SearchError};
pub use finder::PathFinder;
pub use frontier::Frontier;
pub use neighbors::Adjacency;
pub use path::{Path, PathResult, Predecessors, reconstruct};
pub use pather::GridPather;
pub use report::{Replay, ReplayEvent, SearchReport};
pub use request::{Algorithm, SearchConfig, SearchRequest, search};
pub use traits::{AstarPather, Pather, WeightedPather};
