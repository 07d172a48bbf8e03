//! Min-priority frontier for Dijkstra and A*.
//!
//! Entries are stored in a min-heap keyed by `(key, insertion_order)`.
//! Lower keys are popped first; ties are broken by insertion order
//! (FIFO). The same item may be pushed many times with different keys;
//! callers discard stale entries when they pop them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// An entry in the frontier.
#[derive(Debug, Clone)]
struct Entry<T> {
    item: T,
    key: u64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in Reverse.
        self.key.cmp(&other.key).then(self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with FIFO tie-breaking and no deduplication.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push `item` with priority `key`.
    pub fn push(&mut self, item: T, key: u64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, key, seq }));
    }

    /// Pop the entry with the lowest key (ties broken FIFO), or `None` when
    /// the frontier is exhausted.
    pub fn pop(&mut self) -> Option<(T, u64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.key))
    }

    /// Key of the entry [`pop`](Self::pop) would return.
    pub fn peek_key(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(entry)| entry.key)
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove all entries and restart the tie-break counter.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
