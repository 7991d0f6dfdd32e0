//! Round Robin time slicing.
//!
//! # Algorithm
//!
//! 1. Admit every arrived process with remaining work into a FIFO ready
//!    queue, each at most once until it is re-queued by the dispatcher.
//! 2. Dispatch the front process for one quantum. If it still has work,
//!    first admit processes that arrived during the slice, then re-queue it
//!    at the back. Otherwise it completes at the end of its final slice.
//! 3. If the ready queue is empty, jump the clock to the next arrival.
//!
//! `start_time` is the first dispatch; `completion_time` is the end of the
//! last slice.

use std::collections::VecDeque;

use super::Execution;
use crate::error::{Result, ScheduleError};
use crate::models::{Process, Slice, Timeline};
use crate::validation::ensure_valid;

struct ReadyQueue {
    queue: VecDeque<usize>,
    admitted: Vec<bool>,
}

impl ReadyQueue {
    fn new(len: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(len),
            admitted: vec![false; len],
        }
    }

    /// Queues every not-yet-admitted process that has arrived by `time`.
    fn admit_arrivals(&mut self, processes: &[Process], remaining: &[i64], time: i64) {
        for (idx, process) in processes.iter().enumerate() {
            if !self.admitted[idx] && remaining[idx] > 0 && process.has_arrived(time) {
                self.queue.push_back(idx);
                self.admitted[idx] = true;
            }
        }
    }

    /// Earliest arrival among processes never admitted.
    fn next_arrival(&self, processes: &[Process], remaining: &[i64]) -> Option<i64> {
        processes
            .iter()
            .enumerate()
            .filter(|&(idx, _)| !self.admitted[idx] && remaining[idx] > 0)
            .map(|(_, p)| p.arrival_time)
            .min()
    }
}

/// Runs Round Robin with the given quantum.
///
/// Output keeps the input order.
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<Execution> {
    if quantum < 1 {
        return Err(ScheduleError::invalid_config(format!(
            "quantum must be at least 1, got {quantum}"
        )));
    }
    ensure_valid(processes)?;

    let mut processes: Vec<Process> = processes.iter().map(Process::reset).collect();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut dispatched = vec![false; processes.len()];
    let mut ready = ReadyQueue::new(processes.len());
    let mut timeline = Timeline::new();
    let mut completed = 0;
    let mut current_time = 0;

    while completed < processes.len() {
        ready.admit_arrivals(&processes, &remaining, current_time);

        let Some(idx) = ready.queue.pop_front() else {
            match ready.next_arrival(&processes, &remaining) {
                Some(arrival) => {
                    current_time = current_time.max(arrival);
                    continue;
                }
                None => break,
            }
        };

        if !dispatched[idx] {
            processes[idx].start_time = current_time;
            dispatched[idx] = true;
        }

        let run_for = remaining[idx].min(quantum);
        timeline.push(Slice::new(
            idx,
            processes[idx].id,
            current_time,
            current_time + run_for,
        ));
        current_time += run_for;
        remaining[idx] -= run_for;

        if remaining[idx] > 0 {
            ready.admit_arrivals(&processes, &remaining, current_time);
            ready.queue.push_back(idx);
        } else {
            processes[idx].complete_at(current_time);
            completed += 1;
        }
    }

    let positions = (0..processes.len()).collect();
    Ok(Execution {
        processes,
        positions,
        timeline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5, 2),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 8, 4),
        ]
    }

    #[test]
    fn test_rr_reference_scenario() {
        let run = round_robin(&reference_input(), 2).unwrap();

        // P1 0-2 | P2 2-4 | P3 4-6 | P1 6-8 | P2 8-9 | P3 9-11 | P1 11-12 | P3 12-14 | P3 14-16
        let slices: Vec<(i32, i64, i64)> = run
            .timeline
            .slices
            .iter()
            .map(|s| (s.process_id, s.start, s.end))
            .collect();
        assert_eq!(
            slices,
            vec![
                (1, 0, 2),
                (2, 2, 4),
                (3, 4, 6),
                (1, 6, 8),
                (2, 8, 9),
                (3, 9, 11),
                (1, 11, 12),
                (3, 12, 14),
                (3, 14, 16),
            ]
        );

        assert_eq!(run.processes[0].start_time, 0);
        let completion: Vec<i64> = run.processes.iter().map(|p| p.completion_time).collect();
        assert_eq!(completion, vec![12, 9, 16]);
        let waiting: Vec<i64> = run.processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waiting, vec![7, 5, 6]);
        assert_eq!(run.timeline.busy_time(), 16);
    }

    #[test]
    fn test_rr_start_is_first_dispatch() {
        let run = round_robin(&reference_input(), 2).unwrap();
        for (position, p) in run.processes.iter().enumerate() {
            assert_eq!(run.timeline.first_dispatch(position), Some(p.start_time));
        }
    }

    #[test]
    fn test_rr_completion_is_last_slice_end() {
        let run = round_robin(&reference_input(), 3).unwrap();
        for (position, p) in run.processes.iter().enumerate() {
            let last = run.timeline.slices_for(position).last().unwrap();
            assert_eq!(last.end, p.completion_time);
            assert_eq!(run.timeline.busy_time_for(position), p.burst_time);
        }
    }

    #[test]
    fn test_rr_new_arrivals_queue_ahead_of_preempted() {
        // P2 arrives during P1's first slice and must run before P1's second slice
        let processes = vec![Process::new(1, 0, 4, 0), Process::new(2, 1, 2, 0)];
        let run = round_robin(&processes, 2).unwrap();
        let order: Vec<i32> = run.timeline.slices.iter().map(|s| s.process_id).collect();
        assert_eq!(order, vec![1, 2, 1]);
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let run = round_robin(&reference_input(), 100).unwrap();
        assert_eq!(run.timeline.len(), 3);
        let completion: Vec<i64> = run.processes.iter().map(|p| p.completion_time).collect();
        assert_eq!(completion, vec![5, 8, 16]);
    }

    #[test]
    fn test_rr_idle_gap() {
        let processes = vec![Process::new(1, 2, 1, 0), Process::new(2, 9, 3, 0)];
        let run = round_robin(&processes, 2).unwrap();
        assert_eq!(run.processes[0].start_time, 2);
        assert_eq!(run.processes[0].completion_time, 3);
        assert_eq!(run.processes[1].start_time, 9);
        assert_eq!(run.processes[1].completion_time, 12);
    }

    #[test]
    fn test_rr_keeps_input_order() {
        let processes = vec![Process::new(5, 3, 1, 0), Process::new(6, 0, 1, 0)];
        let run = round_robin(&processes, 2).unwrap();
        assert_eq!(run.processes[0].id, 5);
        assert_eq!(run.processes[1].id, 6);
        assert_eq!(run.processes[1].completion_time, 1);
    }

    #[test]
    fn test_rr_repeated_ids_keep_separate_queues() {
        let processes = vec![Process::new(1, 0, 3, 0), Process::new(1, 0, 2, 0)];
        let run = round_robin(&processes, 2).unwrap();
        let positions: Vec<usize> = run.timeline.slices.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 0]);
        assert_eq!(run.processes[0].completion_time, 5);
        assert_eq!(run.processes[1].completion_time, 4);
        assert_eq!(run.positions, vec![0, 1]);
    }

    #[test]
    fn test_rr_negative_arrivals_admitted_at_start() {
        let processes = vec![Process::new(1, -4, 2, 0), Process::new(2, 1, 1, 0)];
        let run = round_robin(&processes, 2).unwrap();
        assert_eq!(run.processes[0].start_time, 0);
        assert_eq!(run.processes[0].waiting_time, 4);
        assert_eq!(run.processes[1].start_time, 2);
    }

    #[test]
    fn test_rr_rejects_zero_quantum() {
        let err = round_robin(&reference_input(), 0).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    }
}
