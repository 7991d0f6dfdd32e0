//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Run each to completion in that order, jumping the clock over idle gaps.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use super::Execution;
use crate::error::Result;
use crate::models::{sorted_by_arrival, Process, Slice, Timeline};
use crate::validation::ensure_valid;

/// Runs FCFS over `processes`.
///
/// Output is in arrival order; equal arrivals keep their input order.
pub fn first_come_first_served(processes: &[Process]) -> Result<Execution> {
    ensure_valid(processes)?;

    let (positions, mut processes) = sorted_by_arrival(processes);
    let mut timeline = Timeline::new();
    let mut current_time = 0;

    for (&position, process) in positions.iter().zip(&mut processes) {
        current_time = current_time.max(process.arrival_time);
        process.run_from(current_time);
        timeline.push(Slice::new(
            position,
            process.id,
            current_time,
            process.completion_time,
        ));
        current_time = process.completion_time;
    }

    Ok(Execution {
        processes,
        positions,
        timeline,
    })
}
