//! Random grid generation for gridpath: scattered obstacles, terrain patches
//! and endpoint placement.

pub mod mapgen;

pub use mapgen::{MapGen, Scenario, ScatterConfig};
