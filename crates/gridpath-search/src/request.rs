//! Validated search requests over a [`Grid`].

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Coord, Grid};

use crate::PathFinder;
use crate::error::{Endpoint, EndpointIssue, SearchError};
use crate::neighbors::Adjacency;
use crate::path::{Path, PathResult};
use crate::pather::GridPather;
use crate::report::SearchReport;

/// Search strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Fewest steps; weights ignored.
    Bfs,
    /// Lowest total weight.
    Dijkstra,
    /// Lowest total weight, guided by a distance estimate.
    #[default]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar];

    /// Whether the strategy minimises total weight rather than step count.
    pub const fn is_weighted(self) -> bool {
        !matches!(self, Algorithm::Bfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => f.write_str("bfs"),
            Algorithm::Dijkstra => f.write_str("dijkstra"),
            Algorithm::AStar => f.write_str("astar"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            other => Err(format!(
                "unknown algorithm \u{201c}{other}\u{201d} (expected bfs, dijkstra or astar)"
            )),
        }
    }
}

/// Settings fixed for the duration of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub adjacency: Adjacency,
    /// Keep the expansion order in the report for replay.
    pub record_visits: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            adjacency: Adjacency::default(),
            record_visits: true,
        }
    }
}

/// A start / end pair plus the settings to search with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: Coord,
    pub end: Coord,
    pub config: SearchConfig,
}

impl SearchRequest {
    /// A request with default settings.
    pub fn new(start: Coord, end: Coord) -> Self {
        Self {
            start,
            end,
            config: SearchConfig::default(),
        }
    }

    /// Build a request from markers that may not have been placed yet.
    pub fn from_markers(start: Option<Coord>, end: Option<Coord>) -> Result<Self, SearchError> {
        let start = start.ok_or(SearchError::MissingEndpoint(Endpoint::Start))?;
        let end = end.ok_or(SearchError::MissingEndpoint(Endpoint::End))?;
        Ok(Self::new(start, end))
    }

    /// Set the algorithm (builder).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Set the adjacency mode (builder).
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.config.adjacency = adjacency;
        self
    }

    /// Replace the whole config (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Check both endpoints against `grid`.
    pub fn validate(&self, grid: &Grid) -> Result<(), SearchError> {
        check_endpoint(grid, Endpoint::Start, self.start)?;
        check_endpoint(grid, Endpoint::End, self.end)
    }
}

fn check_endpoint(grid: &Grid, endpoint: Endpoint, coord: Coord) -> Result<(), SearchError> {
    let issue = match grid.at(coord) {
        None => EndpointIssue::OutOfBounds,
        Some(cell) if cell.blocked => EndpointIssue::Blocked,
        Some(_) => return Ok(()),
    };
    Err(SearchError::InvalidEndpoint {
        endpoint,
        coord,
        issue,
    })
}

impl PathFinder {
    /// Validate `request` against `grid` and run it.
    ///
    /// The finder is resized to the grid if needed. Validation failures are
    /// reported before any search state is touched; once the search starts
    /// the outcome is either a path or [`PathResult::Unreachable`].
    pub fn run(&mut self, grid: &Grid, request: &SearchRequest) -> Result<SearchReport, SearchError> {
        request.validate(grid)?;

        if self.dims() != (grid.rows(), grid.cols()) {
            self.resize(grid.rows(), grid.cols());
        }

        let SearchConfig {
            algorithm,
            adjacency,
            record_visits,
        } = request.config;
        let pather = GridPather::new(grid, adjacency);
        let (start, end) = (request.start, request.end);

        let cells = match algorithm {
            Algorithm::Bfs => self.bfs_path(&pather, start, end),
            Algorithm::Dijkstra => self.dijkstra_path(&pather, start, end),
            Algorithm::AStar => self.astar_path(&pather, start, end),
        };
        let outcome = match cells {
            Some(cells) => PathResult::Found(Path::priced(cells, grid)),
            None => PathResult::Unreachable,
        };

        let visited = if record_visits {
            self.trace.clone()
        } else {
            Vec::new()
        };

        Ok(SearchReport {
            algorithm,
            adjacency,
            start,
            end,
            outcome,
            expanded: self.trace.len(),
            visited,
        })
    }
}

/// Run a single request on a fresh [`PathFinder`].
pub fn search(grid: &Grid, request: &SearchRequest) -> Result<SearchReport, SearchError> {
    PathFinder::for_grid(grid).run(grid, request)
}
