//! Schedule quality metrics.
//!
//! Computes aggregate performance indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Max Waiting | Largest single wait |
//! | Makespan | Latest completion time |
//! | CPU Utilization | total burst / (makespan - earliest arrival) |
//! | Throughput | processes / (makespan - earliest arrival) |

use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::models::Process;

/// Aggregate indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleMetrics {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Largest waiting time of any single process.
    pub max_waiting: i64,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of burst times.
    pub total_burst: i64,
    /// Fraction of the active span the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit over the active span.
    pub throughput: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from annotated processes.
    ///
    /// Fails with [`ScheduleError::EmptyInput`] rather than dividing by zero.
    pub fn calculate(processes: &[Process]) -> Result<Self> {
        if processes.is_empty() {
            return Err(ScheduleError::EmptyInput);
        }

        // Totals in i128: per-process times fit in i64, their sums need not.
        let count = processes.len() as f64;
        let total = |field: fn(&Process) -> i64| -> i128 {
            processes.iter().map(|p| i128::from(field(p))).sum()
        };
        let total_turnaround = total(|p| p.turnaround_time);
        let total_waiting = total(|p| p.waiting_time);
        let total_burst = total(|p| p.burst_time);
        let max_waiting = processes.iter().map(|p| p.waiting_time).max().unwrap_or(0);
        let makespan = processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0);
        let first_arrival = processes
            .iter()
            .map(|p| p.arrival_time)
            .min()
            .unwrap_or(0);

        let span = i128::from(makespan) - i128::from(first_arrival);
        let (cpu_utilization, throughput) = if span > 0 {
            (total_burst as f64 / span as f64, count / span as f64)
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            avg_turnaround: total_turnaround as f64 / count,
            avg_waiting: total_waiting as f64 / count,
            max_waiting,
            makespan,
            total_burst: i64::try_from(total_burst).unwrap_or(i64::MAX),
            cpu_utilization,
            throughput,
        })
    }
}
