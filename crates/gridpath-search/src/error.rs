use std::fmt;

use gridpath_core::Coord;

/// Which endpoint of a request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Why an endpoint cannot be searched from or to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointIssue {
    OutOfBounds,
    Blocked,
}

/// A search request was rejected before the search began.
///
/// An unreachable end cell is not an error; see
/// [`PathResult::Unreachable`](crate::PathResult::Unreachable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No coordinate was given for the endpoint.
    MissingEndpoint(Endpoint),
    /// The endpoint lies outside the grid or on an obstacle.
    InvalidEndpoint {
        endpoint: Endpoint,
        coord: Coord,
        issue: EndpointIssue,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(e) => write!(f, "no {e} cell set"),
            Self::InvalidEndpoint {
                endpoint,
                coord,
                issue: EndpointIssue::OutOfBounds,
            } => write!(f, "{endpoint} cell {coord} is outside the grid"),
            Self::InvalidEndpoint {
                endpoint,
                coord,
                issue: EndpointIssue::Blocked,
            } => write!(f, "{endpoint} cell {coord} is blocked"),
        }
    }
}

impl std::error::Error for SearchError {}
