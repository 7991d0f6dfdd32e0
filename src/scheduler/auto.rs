//! Heuristic policy selection.
//!
//! Inspects the spread of priorities and arrival times and picks one
//! concrete policy. Runs no simulation of its own.
//!
//! # Decision order (first match wins)
//!
//! | Condition | Policy |
//! |-----------|--------|
//! | priority spread > `priority_spread` | Priority |
//! | arrival spread ≤ `compact_arrival_spread` | SJF |
//! | arrival spread > `wide_arrival_spread` | Round Robin |
//! | otherwise | FCFS |
//!
//! Widely spread arrivals pick Round Robin to keep late short jobs from
//! starving behind long ones.

use crate::config::ClassifierThresholds;
use crate::error::{Result, ScheduleError};
use crate::models::{Policy, Process};

/// Spread statistics the classifier decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadProfile {
    /// `max(priority) - min(priority)`.
    pub priority_spread: i64,
    /// `max(arrival) - min(arrival)`.
    pub arrival_spread: i64,
}

impl WorkloadProfile {
    /// Computes spreads over a non-empty process set.
    pub fn of(processes: &[Process]) -> Result<Self> {
        let priority_spread = spread(processes.iter().map(|p| i64::from(p.priority)))
            .ok_or(ScheduleError::EmptyInput)?;
        let arrival_spread =
            spread(processes.iter().map(|p| p.arrival_time)).ok_or(ScheduleError::EmptyInput)?;
        Ok(Self {
            priority_spread,
            arrival_spread,
        })
    }
}

fn spread(values: impl Iterator<Item = i64>) -> Option<i64> {
    values
        .fold(None, |acc: Option<(i64, i64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .map(|(lo, hi)| hi.saturating_sub(lo))
}

/// Chooses a concrete policy from workload statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoClassifier {
    thresholds: ClassifierThresholds,
}

impl AutoClassifier {
    /// Creates a classifier with the given thresholds.
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Picks the policy for `processes`. Never returns [`Policy::Auto`].
    pub fn classify(&self, processes: &[Process]) -> Result<Policy> {
        Ok(self.classify_profile(&WorkloadProfile::of(processes)?))
    }

    /// Picks the policy for precomputed spreads.
    pub fn classify_profile(&self, profile: &WorkloadProfile) -> Policy {
        let t = &self.thresholds;
        if profile.priority_spread > t.priority_spread {
            Policy::Priority
        } else if profile.arrival_spread <= t.compact_arrival_spread {
            Policy::Sjf
        } else if profile.arrival_spread > t.wide_arrival_spread {
            Policy::RoundRobin
        } else {
            Policy::Fcfs
        }
    }
}
