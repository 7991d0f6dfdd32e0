//! Random workload generation.
//!
//! Produces reproducible process sets for demos and randomized testing.
//! Every generated process has a positive burst time, so output always
//! passes [`crate::validation::validate_input`] when `count > 0`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::Process;

/// Generates processes with uniformly drawn arrival, burst and priority.
///
/// All ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadGenerator {
    arrival: (i64, i64),
    burst: (i64, i64),
    priority: (i32, i32),
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            arrival: (0, 20),
            burst: (1, 10),
            priority: (0, 10),
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator with default ranges (arrival 0..=20, burst 1..=10,
    /// priority 0..=10).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival time range. Negative bounds are raised to 0.
    pub fn with_arrival_range(mut self, lo: i64, hi: i64) -> Self {
        self.arrival = ordered(lo.max(0), hi.max(0));
        self
    }

    /// Sets the burst time range. Bounds below 1 are raised to 1.
    pub fn with_burst_range(mut self, lo: i64, hi: i64) -> Self {
        self.burst = ordered(lo.max(1), hi.max(1));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, lo: i32, hi: i32) -> Self {
        self.priority = ordered(lo, hi);
        self
    }

    /// Generates `count` processes with ids `1..=count`.
    pub fn generate<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Process> {
        (1..=count)
            .map(|id| {
                Process::new(
                    id as i32,
                    rng.random_range(self.arrival.0..=self.arrival.1),
                    rng.random_range(self.burst.0..=self.burst.1),
                    rng.random_range(self.priority.0..=self.priority.1),
                )
            })
            .collect()
    }

    /// Generates `count` processes from a fixed seed.
    pub fn generate_seeded(&self, seed: u64, count: usize) -> Vec<Process> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng, count)
    }
}

fn ordered<T: Ord + Copy>(a: T, b: T) -> (T, T) {
    (a.min(b), a.max(b))
}
