//! Dispatch timeline model.
//!
//! A timeline records every interval during which a process held the CPU.
//! Non-preemptive policies produce exactly one slice per process; Round
//! Robin produces one slice per dispatch.
//!
//! Slices are keyed by the process's position in the caller's input, since
//! process IDs need not be unique.

use serde::{Deserialize, Serialize};

/// One contiguous CPU interval `[start, end)` granted to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Position of the process in the simulated input.
    pub position: usize,
    /// ID of the process that ran.
    pub process_id: i32,
    /// Dispatch time.
    pub start: i64,
    /// Time the CPU was released.
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(position: usize, process_id: i32, start: i64, end: i64) -> Self {
        Self {
            position,
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered sequence of dispatches produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatch.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Latest slice end (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Total CPU time granted to the process at input `position`.
    pub fn busy_time_for(&self, position: usize) -> i64 {
        self.slices_for(position).map(Slice::duration).sum()
    }

    /// All slices of the process at input `position`, in dispatch order.
    pub fn slices_for(&self, position: usize) -> impl Iterator<Item = &Slice> {
        self.slices.iter().filter(move |s| s.position == position)
    }

    /// Time of the first dispatch of the process at input `position`.
    pub fn first_dispatch(&self, position: usize) -> Option<i64> {
        self.slices_for(position).map(|s| s.start).next()
    }

    /// Number of context switches between distinct processes.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].position != w[1].position)
            .count()
    }

    /// Whether no two slices overlap (slices are in dispatch order).
    pub fn is_sequential(&self) -> bool {
        self.slices.windows(2).all(|w| w[0].end <= w[1].start)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was dispatched.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
