//! JSON report of a simulation run.
//!
//! Field names follow the report shape consumed by existing front ends:
//!
//! ```json
//! { "processes": [ { "index": 1, "Tarrival": 0, "Tburst": 5, "Priority": 2,
//!                    "Tstart": 0, "Tcompletion": 5, "Twaiting": 0, "Tturnaround": 5 } ],
//!   "taroundavg": 8.666, "twaitavg": 3.333, "schedulingOverhead": 0.00001,
//!   "algorithm": "FCFS", "requested": "Auto" }
//! ```

use std::time::Duration;

use serde::Serialize;

use crate::models::{Policy, Process};
use crate::scheduler::ScheduleOutcome;

/// Per-process report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    /// Process ID.
    pub index: i32,
    #[serde(rename = "Tarrival")]
    pub arrival: i64,
    #[serde(rename = "Tburst")]
    pub burst: i64,
    #[serde(rename = "Priority")]
    pub priority: i32,
    #[serde(rename = "Tstart")]
    pub start: i64,
    #[serde(rename = "Tcompletion")]
    pub completion: i64,
    #[serde(rename = "Twaiting")]
    pub waiting: i64,
    #[serde(rename = "Tturnaround")]
    pub turnaround: i64,
}

impl From<&Process> for ProcessReport {
    fn from(p: &Process) -> Self {
        Self {
            index: p.id,
            arrival: p.arrival_time,
            burst: p.burst_time,
            priority: p.priority,
            start: p.start_time,
            completion: p.completion_time,
            waiting: p.waiting_time,
            turnaround: p.turnaround_time,
        }
    }
}

/// Complete run report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub processes: Vec<ProcessReport>,
    /// Average turnaround time.
    #[serde(rename = "taroundavg")]
    pub avg_turnaround: f64,
    /// Average waiting time.
    #[serde(rename = "twaitavg")]
    pub avg_waiting: f64,
    /// Wall-clock cost of the simulation, in seconds.
    #[serde(rename = "schedulingOverhead")]
    pub scheduling_overhead: f64,
    /// Policy that ran.
    pub algorithm: Policy,
    /// Policy the caller asked for.
    pub requested: Policy,
}

impl Report {
    /// Builds a report from an outcome and the measured simulation cost.
    pub fn new(outcome: &ScheduleOutcome, elapsed: Duration) -> Self {
        Self {
            processes: outcome.processes.iter().map(ProcessReport::from).collect(),
            avg_turnaround: outcome.metrics.avg_turnaround,
            avg_waiting: outcome.metrics.avg_waiting,
            scheduling_overhead: elapsed.as_secs_f64(),
            algorithm: outcome.policy,
            requested: outcome.requested,
        }
    }

    /// Compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
