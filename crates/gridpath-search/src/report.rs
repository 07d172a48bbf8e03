//! Search results and their replay stream.
//!
//! A [`SearchReport`] is complete when it is returned. Front-ends that want to
//! animate the search drain [`SearchReport::replay`] at their own pace; how
//! fast or slow they do so has no bearing on the result.

use std::slice;

use gridpath_core::Coord;

use crate::neighbors::Adjacency;
use crate::path::{Path, PathResult};
use crate::request::Algorithm;

/// Everything a finished search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub adjacency: Adjacency,
    pub start: Coord,
    pub end: Coord,
    pub outcome: PathResult,
    /// Number of cells expanded, recorded or not.
    pub expanded: usize,
    /// Expansion order, empty unless the request asked for it.
    pub visited: Vec<Coord>,
}

impl SearchReport {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        self.outcome.path()
    }

    /// Whether the end cell was reached.
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }

    /// Events for progressive display: every visited cell, then every path
    /// cell, then a single [`ReplayEvent::Finished`].
    pub fn replay(&self) -> Replay<'_> {
        let path = self.path().map(Path::cells).unwrap_or_default();
        Replay {
            visits: self.visited.iter(),
            path: path.iter(),
            found: self.is_found(),
            finished: false,
        }
    }
}

/// One step of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayEvent {
    /// The search expanded this cell.
    Visit(Coord),
    /// This cell is on the final path (start to end order).
    PathStep(Coord),
    /// Last event; `found` is false when the end was unreachable.
    Finished { found: bool },
}

/// Finite iterator over a report's [`ReplayEvent`]s.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    visits: slice::Iter<'a, Coord>,
    path: slice::Iter<'a, Coord>,
    found: bool,
    finished: bool,
}

impl Iterator for Replay<'_> {
    type Item = ReplayEvent;

    fn next(&mut self) -> Option<ReplayEvent> {
        if let Some(&c) = self.visits.next() {
            return Some(ReplayEvent::Visit(c));
        }
        if let Some(&c) = self.path.next() {
            return Some(ReplayEvent::PathStep(c));
        }
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(ReplayEvent::Finished { found: self.found })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.visits.len() + self.path.len() + usize::from(!self.finished);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Replay<'_> {}

impl std::iter::FusedIterator for Replay<'_> {}
