//! FIFO frontier for breadth-first expansion.
//!
//! Keys leave in the order they entered, so states are expanded in
//! non-decreasing distance from the start. That ordering is what makes the
//! first discovery link recorded for a key lie on a shortest path.

use std::collections::VecDeque;

use arcosphere_kernel::carrier::packed::PackedKeyV1;

/// Breadth-first work queue.
///
/// Maintains:
/// - A `VecDeque` of packed keys awaiting expansion
/// - A high-water mark of queue length
/// - A count of all keys ever enqueued
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<PackedKeyV1>,
    high_water: u64,
    total_enqueued: u64,
}

impl FifoFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key to the back of the queue.
    pub fn push(&mut self, key: PackedKeyV1) {
        self.queue.push_back(key);
        self.total_enqueued += 1;
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the oldest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<PackedKeyV1> {
        self.queue.pop_front()
    }

    /// Drop every pending key. Counters are kept.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of queue length.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Number of keys ever pushed.
    #[must_use]
    pub fn total_enqueued(&self) -> u64 {
        self.total_enqueued
    }
}
