//! Process record model.
//!
//! A process is the unit every scheduling policy reads and annotates:
//! static demand (arrival, burst, priority) plus the timing outcome
//! written by exactly one simulation run.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Derived fields (`start_time`, `completion_time`, `waiting_time`,
/// `turnaround_time`) are zero until a policy annotates the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub id: i32,
    /// Time at which the process becomes eligible.
    pub arrival_time: i64,
    /// Total CPU time needed to run to completion.
    pub burst_time: i64,
    /// Scheduling priority (lower value = runs first).
    pub priority: i32,
    /// Time of first dispatch.
    #[serde(default)]
    pub start_time: i64,
    /// Time the last unit of work finished.
    #[serde(default)]
    pub completion_time: i64,
    /// `turnaround_time - burst_time`.
    #[serde(default)]
    pub waiting_time: i64,
    /// `completion_time - arrival_time`.
    #[serde(default)]
    pub turnaround_time: i64,
}

impl Process {
    /// Creates an unscheduled process.
    pub fn new(id: i32, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            start_time: 0,
            completion_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Records the completion time and derives turnaround and waiting.
    pub fn complete_at(&mut self, completion_time: i64) {
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Runs the process uninterrupted from `start_time` to completion.
    pub fn run_from(&mut self, start_time: i64) {
        self.start_time = start_time;
        self.complete_at(start_time + self.burst_time);
    }

    /// Response ratio at `time`: `(waiting + burst) / burst`.
    ///
    /// Callers guarantee `burst_time > 0` (see [`crate::validation`]).
    pub fn response_ratio(&self, time: i64) -> f64 {
        let waited = (time - self.arrival_time) as f64;
        let burst = self.burst_time as f64;
        (waited + burst) / burst
    }

    /// Returns a copy with all derived timing fields cleared.
    pub fn reset(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time, self.priority)
    }
}

/// Stable arrival-order copy of `processes`, timing fields cleared.
///
/// Returns the input positions alongside the copies, in the same order.
pub(crate) fn sorted_by_arrival(processes: &[Process]) -> (Vec<usize>, Vec<Process>) {
    let mut sorted: Vec<(usize, Process)> = processes
        .iter()
        .map(Process::reset)
        .enumerate()
        .collect();
    sorted.sort_by_key(|(_, p)| p.arrival_time);
    sorted.into_iter().unzip()
}
