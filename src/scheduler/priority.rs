//! Non-preemptive priority scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Admit every process that has arrived into a min-heap keyed by
//!    priority value.
//! 3. Pop the best and run it to completion; if the heap is empty, jump
//!    the clock to the next arrival.
//!
//! Equal priorities are served in insertion order. Insertion follows the
//! arrival sort, so the earlier arrival (then the earlier input position)
//! wins a tie.
//!
//! # Complexity
//! O(n log n).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Execution;
use crate::error::Result;
use crate::models::{sorted_by_arrival, Process, Slice, Timeline};
use crate::validation::ensure_valid;

struct HeapEntry<T> {
    key: i32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    // BinaryHeap is a max-heap: invert so the smallest (key, seq) surfaces.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap ordered by an integer key, FIFO among equal keys.
pub struct PriorityHeap<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> PriorityHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Inserts `item` with priority `key` (lower = popped first).
    pub fn push(&mut self, key: i32, item: T) {
        self.heap.push(HeapEntry {
            key,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Removes the entry with the lowest key (earliest inserted on ties).
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs priority scheduling over `processes`.
///
/// Output is in completion order, not input or arrival order.
pub fn priority_scheduling(processes: &[Process]) -> Result<Execution> {
    ensure_valid(processes)?;

    let (positions, sorted) = sorted_by_arrival(processes);
    let mut pending = positions.into_iter().zip(sorted).peekable();
    let mut ready = PriorityHeap::new();
    let mut finished = Vec::with_capacity(processes.len());
    let mut timeline = Timeline::new();
    let mut current_time = 0;

    while pending.peek().is_some() || !ready.is_empty() {
        while let Some(entry) = pending.next_if(|(_, p)| p.has_arrived(current_time)) {
            ready.push(entry.1.priority, entry);
        }

        match ready.pop() {
            Some((position, mut process)) => {
                current_time = current_time.max(process.arrival_time);
                process.run_from(current_time);
                timeline.push(Slice::new(
                    position,
                    process.id,
                    process.start_time,
                    process.completion_time,
                ));
                current_time = process.completion_time;
                finished.push((position, process));
            }
            None => {
                if let Some((_, next)) = pending.peek() {
                    current_time = next.arrival_time;
                }
            }
        }
    }

    let (positions, processes) = finished.into_iter().unzip();
    Ok(Execution {
        processes,
        positions,
        timeline,
    })
}
