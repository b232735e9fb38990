use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap slot ordered by priority, then by insertion sequence
#[derive(Debug, Clone)]
struct HeapEntry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Binary min-heap keyed by an `f64` priority.
///
/// Equal priorities pop in insertion order (FIFO). Priorities are compared
/// with `f64::total_cmp`, so a NaN priority sorts after every finite value
/// instead of corrupting the heap.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove the item with the smallest priority
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Smallest priority currently queued, `None` when empty
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
