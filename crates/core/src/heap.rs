//! Stable min-priority queue for tree construction.
//!
//! Huffman construction repeatedly extracts the two lowest-weight nodes.
//! When two nodes have equal weight, which one comes out first determines
//! the final tree shape and therefore the exact code words, so the queue
//! must break ties deterministically. This queue resolves equal priorities
//! by insertion order: first inserted, first extracted.
//!
//! Implemented over `std::collections::BinaryHeap` by ordering entries on
//! `(priority, insertion sequence)` and reversing the comparison to turn
//! the max-heap into a min-heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One queue entry. Ordering ignores `item` entirely; the sequence number
/// is unique per queue, so the ordering is total and stable.
#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: u64,
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: lowest priority first,
        // then lowest (earliest) sequence number among equals.
        (other.priority, other.seq).cmp(&(self.priority, self.seq))
    }
}

/// Min-priority queue with first-in-first-out tie-breaking.
#[derive(Debug)]
pub struct StableMinHeap<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> StableMinHeap<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn insert(&mut self, item: T, priority: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            item,
            priority,
            seq,
        });
    }

    /// Remove and return the lowest-priority item, or `None` when empty.
    ///
    /// Among items of equal priority, the one inserted earliest comes out
    /// first.
    pub fn extract_min(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for StableMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
