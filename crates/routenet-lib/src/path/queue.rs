use std::cmp::{Ordering, Reverse};

use priority_queue::PriorityQueue;

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Min-priority queue of vertex codes keyed by tentative distance.
///
/// Each code is held at most once; lowering a code's distance repositions it
/// in place instead of pushing a duplicate entry.
#[derive(Debug, Default)]
pub(crate) struct DistanceQueue {
    heap: PriorityQueue<String, Reverse<FloatOrd>>,
}

impl DistanceQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `code`, replacing its distance when it is already queued.
    pub(crate) fn insert(&mut self, code: String, distance: f64) {
        self.heap.push(code, Reverse(FloatOrd(distance)));
    }

    /// Remove and return the code with the smallest distance.
    pub(crate) fn pop_min(&mut self) -> Option<(String, f64)> {
        self.heap
            .pop()
            .map(|(code, Reverse(FloatOrd(distance)))| (code, distance))
    }

    /// Lower the distance of a queued code. Returns `false` when the code is
    /// not queued or `distance` is not an improvement.
    pub(crate) fn decrease_key(&mut self, code: &str, distance: f64) -> bool {
        let improves = match self.heap.get_priority(code) {
            Some(Reverse(FloatOrd(current))) => distance < *current,
            None => false,
        };
        if improves {
            self.heap.change_priority(code, Reverse(FloatOrd(distance)));
        }
        improves
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
