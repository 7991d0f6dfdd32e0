//! Deterministic CPU scheduling simulator.
//!
//! Computes per-process start, completion, waiting and turnaround times
//! under a chosen policy, plus aggregate metrics. The simulation is
//! offline and single-core over integer time units.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Policy`, `Slice`, `Timeline`
//! - **`dispatching`**: Selection rules and the eligible-process rule engine
//! - **`scheduler`**: FCFS, RR, SJF, LJF, Priority, HRRN, the auto-classifier,
//!   metrics and the `Simulator` entry point
//! - **`validation`**: Input integrity checks (empty set, burst, arrival, IDs)
//! - **`config`**: Quantum and classifier thresholds
//! - **`input`** / **`report`**: Text parser and JSON report adapters
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::input::parse_processes;
//! use cpu_sched::models::Policy;
//! use cpu_sched::scheduler::simulate;
//!
//! let processes = parse_processes("1,0,5,2;2,1,3,1;3,2,8,4").unwrap();
//! let outcome = simulate(&processes, Policy::RoundRobin).unwrap();
//! assert_eq!(outcome.timeline.busy_time(), 16);
//! ```
//!
//! The library performs no I/O and no logging; it reports every failure
//! as a [`ScheduleError`].
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SchedulerConfig;
pub use error::ScheduleError;
pub use models::{Policy, Process};
pub use scheduler::{simulate, ScheduleOutcome, Simulator};
