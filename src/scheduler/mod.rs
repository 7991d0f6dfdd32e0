//! Scheduling policies, policy selection and run metrics.
//!
//! Every policy is a pure function from a process slice to a new annotated
//! process list plus the dispatch timeline; the caller's input is never
//! mutated. [`Simulator`] validates input, resolves `Auto` through the
//! [`AutoClassifier`], runs exactly one policy and aggregates metrics.
//!
//! # Policies
//!
//! | Policy | Module | Output order |
//! |--------|--------|--------------|
//! | FCFS | `fcfs` | arrival |
//! | SJF, LJF, HRRN | `greedy` | arrival |
//! | Priority | `priority` | completion |
//! | Round Robin | `round_robin` | input |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod auto;
mod fcfs;
mod greedy;
mod metrics;
mod priority;
mod round_robin;
mod simulator;

pub use auto::{AutoClassifier, WorkloadProfile};
pub use fcfs::first_come_first_served;
pub use greedy::{highest_response_ratio_next, longest_job_first, run_greedy, shortest_job_first};
pub use metrics::ScheduleMetrics;
pub use priority::{priority_scheduling, PriorityHeap};
pub use round_robin::round_robin;
pub use simulator::{simulate, Simulator};

use serde::Serialize;

use crate::models::{Policy, Process, Timeline};

/// Annotated processes and dispatch timeline produced by one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Processes with timing fields written.
    pub processes: Vec<Process>,
    /// Input position of each entry in `processes`.
    pub positions: Vec<usize>,
    /// Dispatches in order.
    pub timeline: Timeline,
}

/// Full result of a simulation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleOutcome {
    /// Policy the caller asked for.
    pub requested: Policy,
    /// Policy that actually ran (differs from `requested` only for `Auto`).
    pub policy: Policy,
    /// Annotated processes, in the order the policy produced them.
    pub processes: Vec<Process>,
    /// Input position of each entry in `processes`.
    pub positions: Vec<usize>,
    /// Dispatch timeline.
    pub timeline: Timeline,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
}

impl ScheduleOutcome {
    /// Finds the first annotated process with the given ID.
    pub fn process(&self, id: i32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Annotated process that came from input `position`.
    pub fn process_at(&self, position: usize) -> Option<&Process> {
        self.positions
            .iter()
            .position(|&p| p == position)
            .map(|k| &self.processes[k])
    }

    /// Mean turnaround time.
    pub fn avg_turnaround(&self) -> f64 {
        self.metrics.avg_turnaround
    }

    /// Mean waiting time.
    pub fn avg_waiting(&self) -> f64 {
        self.metrics.avg_waiting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClassifierThresholds, SchedulerConfig};
    use crate::workload::WorkloadGenerator;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const CONCRETE: [Policy; 6] = [
        Policy::Fcfs,
        Policy::RoundRobin,
        Policy::Sjf,
        Policy::Ljf,
        Policy::Priority,
        Policy::Hrrn,
    ];

    fn random_workloads() -> Vec<Vec<Process>> {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let generators = [
            WorkloadGenerator::new(),
            WorkloadGenerator::new().with_arrival_range(0, 3),
            WorkloadGenerator::new()
                .with_arrival_range(0, 60)
                .with_burst_range(1, 4),
            WorkloadGenerator::new().with_priority_range(0, 40),
        ];
        let mut workloads = Vec::new();
        for generator in &generators {
            for count in [1, 2, 5, 12, 25] {
                workloads.push(generator.generate(&mut rng, count));
            }
        }
        workloads
    }

    fn assert_invariants(input: &[Process], outcome: &ScheduleOutcome) {
        assert_eq!(outcome.processes.len(), input.len());
        let mut positions = outcome.positions.clone();
        positions.sort_unstable();
        assert_eq!(positions, (0..input.len()).collect::<Vec<_>>());

        for (p, &position) in outcome.processes.iter().zip(&outcome.positions) {
            let original = &input[position];
            assert_eq!(p.id, original.id);
            assert_eq!(p.arrival_time, original.arrival_time);
            assert_eq!(p.burst_time, original.burst_time);
            assert_eq!(p.turnaround_time, p.completion_time - p.arrival_time);
            assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
            assert!(p.completion_time >= p.arrival_time + p.burst_time);
            assert!(p.start_time >= p.arrival_time);
            assert_eq!(outcome.timeline.busy_time_for(position), p.burst_time);
            assert_eq!(outcome.timeline.first_dispatch(position), Some(p.start_time));
            let last = outcome.timeline.slices_for(position).last().unwrap();
            assert_eq!(last.end, p.completion_time);
        }
        for slice in &outcome.timeline.slices {
            let p = &input[slice.position];
            assert_eq!(p.id, slice.process_id);
            assert!(p.arrival_time <= slice.start, "dispatched before arrival");
        }
        assert!(outcome.timeline.is_sequential());
        let total_burst: i64 = input.iter().map(|p| p.burst_time).sum();
        assert_eq!(outcome.timeline.busy_time(), total_burst);
    }

    #[test]
    fn test_invariants_hold_for_all_policies() {
        let simulator = Simulator::new();
        for input in random_workloads() {
            for policy in Policy::ALL {
                let outcome = simulator.simulate(&input, policy).unwrap();
                assert_invariants(&input, &outcome);
            }
        }
    }

    #[test]
    fn test_invariants_hold_for_other_quanta() {
        for quantum in [1, 3, 7] {
            let simulator = Simulator::new().with_quantum(quantum);
            for input in random_workloads() {
                let outcome = simulator.simulate(&input, Policy::RoundRobin).unwrap();
                assert_invariants(&input, &outcome);
            }
        }
    }

    #[test]
    fn test_invariants_hold_with_repeated_ids_and_negative_arrivals() {
        let simulator = Simulator::new();
        let input = vec![
            Process::new(1, -5, 4, 2),
            Process::new(1, 0, 3, 1),
            Process::new(2, 3, 2, 9),
            Process::new(1, -1, 1, 0),
            Process::new(2, 12, 5, 2),
        ];
        for policy in Policy::ALL {
            let outcome = simulator.simulate(&input, policy).unwrap();
            assert_invariants(&input, &outcome);
        }
    }

    #[test]
    fn test_auto_matches_delegate() {
        let simulator = Simulator::new();
        let classifier = AutoClassifier::default();
        for input in random_workloads() {
            let auto = simulator.simulate(&input, Policy::Auto).unwrap();
            let chosen = classifier.classify(&input).unwrap();
            let direct = simulator.simulate(&input, chosen).unwrap();
            assert_eq!(auto.requested, Policy::Auto);
            assert_eq!(auto.policy, chosen);
            assert_eq!(auto.processes, direct.processes);
            assert_eq!(auto.metrics, direct.metrics);
        }
    }

    #[test]
    fn test_auto_reaches_every_branch() {
        let simulator = Simulator::new();
        let cases = [
            // priority spread 20 > 15
            (vec![Process::new(1, 0, 3, 0), Process::new(2, 1, 2, 20)], Policy::Priority),
            // arrival spread 2 ≤ 8
            (vec![Process::new(1, 0, 3, 0), Process::new(2, 2, 2, 1)], Policy::Sjf),
            // arrival spread 30 > 20
            (vec![Process::new(1, 0, 3, 0), Process::new(2, 30, 2, 1)], Policy::RoundRobin),
            // arrival spread 12
            (vec![Process::new(1, 0, 3, 0), Process::new(2, 12, 2, 1)], Policy::Fcfs),
        ];
        for (input, expected) in cases {
            let outcome = simulator.simulate(&input, Policy::Auto).unwrap();
            assert_eq!(outcome.policy, expected);
            let direct = simulator.simulate(&input, expected).unwrap();
            assert_eq!(outcome.processes, direct.processes);
        }
    }

    #[test]
    fn test_fcfs_depends_only_on_arrival_order() {
        let input = vec![
            Process::new(1, 4, 3, 0),
            Process::new(2, 0, 2, 0),
            Process::new(3, 9, 5, 0),
            Process::new(4, 1, 1, 0),
        ];
        let mut shuffled = input.clone();
        shuffled.reverse();
        let a = simulate(&input, Policy::Fcfs).unwrap();
        let b = simulate(&shuffled, Policy::Fcfs).unwrap();
        assert_eq!(a.processes, b.processes);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let input = WorkloadGenerator::new().generate_seeded(11, 20);
        let snapshot = input.clone();
        for policy in CONCRETE {
            let first = simulate(&input, policy).unwrap();
            let second = simulate(&input, policy).unwrap();
            assert_eq!(first, second);
        }
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_reference_scenario_outcome() {
        let input = vec![
            Process::new(1, 0, 5, 2),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 8, 4),
        ];
        let outcome = simulate(&input, Policy::Fcfs).unwrap();
        assert!((outcome.avg_turnaround() - 8.667).abs() < 1e-3);
        assert!((outcome.avg_waiting() - 3.333).abs() < 1e-3);
        assert_eq!(outcome.process(3).unwrap().completion_time, 16);
        assert_eq!(outcome.process_at(2).unwrap().id, 3);
        assert!(outcome.process(4).is_none());
        assert!(outcome.process_at(3).is_none());

        let rr = simulate(&input, Policy::RoundRobin).unwrap();
        assert_eq!(rr.process(1).unwrap().start_time, 0);
        assert_eq!(rr.timeline.busy_time(), 16);
        assert_eq!(rr.metrics.makespan, 16);
    }

    #[test]
    fn test_simulator_config_flows_through() {
        let input = vec![Process::new(1, 0, 3, 0), Process::new(2, 12, 2, 1)];
        let strict = Simulator::new().with_config(
            SchedulerConfig::new()
                .with_thresholds(ClassifierThresholds::default().with_wide_arrival_spread(10)),
        );
        assert_eq!(strict.simulate(&input, Policy::Auto).unwrap().policy, Policy::RoundRobin);
        assert_eq!(strict.config().thresholds.wide_arrival_spread, 10);
    }
}
