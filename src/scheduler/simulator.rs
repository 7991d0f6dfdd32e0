//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate configuration and input.
//! 2. Resolve `Auto` to a concrete policy via the classifier.
//! 3. Run exactly one policy.
//! 4. Aggregate metrics over the annotated processes.

use super::{
    first_come_first_served, highest_response_ratio_next, longest_job_first, priority_scheduling,
    round_robin, shortest_job_first, AutoClassifier, Execution, ScheduleMetrics, ScheduleOutcome,
};
use crate::config::{ClassifierThresholds, SchedulerConfig};
use crate::error::Result;
use crate::models::{Policy, Process};
use crate::validation::ensure_valid;

/// Runs scheduling policies under a fixed configuration.
///
/// # Example
///
/// ```
/// use cpu_sched::models::{Policy, Process};
/// use cpu_sched::scheduler::Simulator;
///
/// let processes = vec![
///     Process::new(1, 0, 5, 2),
///     Process::new(2, 1, 3, 1),
///     Process::new(3, 2, 8, 4),
/// ];
/// let outcome = Simulator::new().simulate(&processes, Policy::Fcfs).unwrap();
/// assert_eq!(outcome.process(3).unwrap().completion_time, 16);
/// assert!((outcome.avg_waiting() - 10.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SchedulerConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.config.quantum = quantum;
        self
    }

    /// Sets the auto-classifier thresholds.
    pub fn with_thresholds(mut self, thresholds: ClassifierThresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Classifier built from the configured thresholds.
    pub fn classifier(&self) -> AutoClassifier {
        AutoClassifier::new(self.config.thresholds)
    }

    /// Concrete policy that `policy` runs as on `processes`.
    pub fn resolve(&self, processes: &[Process], policy: Policy) -> Result<Policy> {
        match policy {
            Policy::Auto => self.classifier().classify(processes),
            concrete => Ok(concrete),
        }
    }

    /// Simulates `processes` under `policy` and aggregates metrics.
    ///
    /// The input slice is not modified.
    pub fn simulate(&self, processes: &[Process], policy: Policy) -> Result<ScheduleOutcome> {
        self.config.validate()?;
        ensure_valid(processes)?;

        let resolved = self.resolve(processes, policy)?;
        let Execution {
            processes: annotated,
            positions,
            timeline,
        } = self.execute(processes, resolved)?;
        let metrics = ScheduleMetrics::calculate(&annotated)?;

        Ok(ScheduleOutcome {
            requested: policy,
            policy: resolved,
            processes: annotated,
            positions,
            timeline,
            metrics,
        })
    }

    /// Runs a single policy without aggregating metrics.
    pub fn execute(&self, processes: &[Process], policy: Policy) -> Result<Execution> {
        match policy {
            Policy::Fcfs => first_come_first_served(processes),
            Policy::RoundRobin => round_robin(processes, self.config.quantum),
            Policy::Sjf => shortest_job_first(processes),
            Policy::Ljf => longest_job_first(processes),
            Policy::Priority => priority_scheduling(processes),
            Policy::Hrrn => highest_response_ratio_next(processes),
            Policy::Auto => {
                let resolved = self.resolve(processes, policy)?;
                self.execute(processes, resolved)
            }
        }
    }
}

/// Simulates with the default configuration.
pub fn simulate(processes: &[Process], policy: Policy) -> Result<ScheduleOutcome> {
    Simulator::new().simulate(processes, policy)
}
