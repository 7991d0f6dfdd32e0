//! Non-preemptive greedy selection (SJF, LJF, HRRN).
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. At each decision point, ask the rule engine for the best eligible
//!    process (arrived, not completed); ties go to the earliest in scan order.
//! 3. Run it to completion and advance the clock.
//! 4. If nothing is eligible, jump the clock to the next pending arrival.
//!
//! The three policies differ only in the selection rule: burst ascending,
//! burst descending, or response ratio descending (recomputed every step).
//!
//! # Complexity
//! O(n²) rule evaluations: one full rescan per dispatch.

use super::Execution;
use crate::dispatching::{rules, RuleEngine, SelectionContext};
use crate::error::Result;
use crate::models::{sorted_by_arrival, Process, Slice, Timeline};
use crate::validation::ensure_valid;

/// Shortest Job First (non-preemptive).
pub fn shortest_job_first(processes: &[Process]) -> Result<Execution> {
    run_greedy(processes, &RuleEngine::new().with_rule(rules::ShortestBurst))
}

/// Longest Job First (non-preemptive).
pub fn longest_job_first(processes: &[Process]) -> Result<Execution> {
    run_greedy(processes, &RuleEngine::new().with_rule(rules::LongestBurst))
}

/// Highest Response Ratio Next.
pub fn highest_response_ratio_next(processes: &[Process]) -> Result<Execution> {
    run_greedy(
        processes,
        &RuleEngine::new().with_rule(rules::HighestResponseRatio),
    )
}

/// Runs the shared select-run-advance loop with an arbitrary rule engine.
///
/// Output is in arrival order (stable), not dispatch order; the timeline
/// records dispatch order.
pub fn run_greedy(processes: &[Process], engine: &RuleEngine) -> Result<Execution> {
    ensure_valid(processes)?;

    let (positions, mut processes) = sorted_by_arrival(processes);
    let mut completed = vec![false; processes.len()];
    let mut remaining = processes.len();
    let mut timeline = Timeline::new();
    let mut context = SelectionContext::at_time(0);

    while remaining > 0 {
        match engine.select_eligible(&processes, &completed, &context) {
            Some(idx) => {
                let process = &mut processes[idx];
                process.run_from(context.current_time);
                timeline.push(Slice::new(
                    positions[idx],
                    process.id,
                    process.start_time,
                    process.completion_time,
                ));
                context.advance_to(process.completion_time);
                completed[idx] = true;
                remaining -= 1;
            }
            None => {
                // Idle: nothing can become eligible before the next arrival.
                let next_arrival = processes
                    .iter()
                    .zip(&completed)
                    .filter(|&(_, &done)| !done)
                    .map(|(p, _)| p.arrival_time)
                    .min();
                match next_arrival {
                    Some(arrival) => context.advance_to(arrival),
                    None => break,
                }
            }
        }
    }

    Ok(Execution {
        processes,
        positions,
        timeline,
    })
}
