//! Simulation configuration.
//!
//! Holds the Round Robin quantum and the auto-classifier thresholds.
//! Defaults are quantum 2 and thresholds 15 / 8 / 20. Every value can be
//! overridden through the builder or, in the binary, through `CPU_SCHED_*`
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Default Round Robin quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Priority spread above which the classifier picks Priority scheduling.
pub const DEFAULT_PRIORITY_SPREAD: i64 = 15;

/// Arrival spread at or below which the classifier picks SJF.
pub const DEFAULT_COMPACT_ARRIVAL_SPREAD: i64 = 8;

/// Arrival spread above which the classifier picks Round Robin.
pub const DEFAULT_WIDE_ARRIVAL_SPREAD: i64 = 20;

const ENV_QUANTUM: &str = "CPU_SCHED_QUANTUM";
const ENV_PRIORITY_SPREAD: &str = "CPU_SCHED_PRIORITY_SPREAD";
const ENV_COMPACT_ARRIVAL_SPREAD: &str = "CPU_SCHED_COMPACT_ARRIVAL_SPREAD";
const ENV_WIDE_ARRIVAL_SPREAD: &str = "CPU_SCHED_WIDE_ARRIVAL_SPREAD";

/// Auto-classifier decision thresholds.
///
/// Rules are checked in order; a value exactly at a threshold falls
/// through to the next rule except for `compact_arrival_spread`, which
/// is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    /// `max(priority) - min(priority)` must exceed this for Priority.
    pub priority_spread: i64,
    /// `max(arrival) - min(arrival)` at or below this selects SJF.
    pub compact_arrival_spread: i64,
    /// `max(arrival) - min(arrival)` above this selects Round Robin.
    pub wide_arrival_spread: i64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            priority_spread: DEFAULT_PRIORITY_SPREAD,
            compact_arrival_spread: DEFAULT_COMPACT_ARRIVAL_SPREAD,
            wide_arrival_spread: DEFAULT_WIDE_ARRIVAL_SPREAD,
        }
    }
}

impl ClassifierThresholds {
    /// Sets the priority spread threshold.
    pub fn with_priority_spread(mut self, spread: i64) -> Self {
        self.priority_spread = spread;
        self
    }

    /// Sets the compact (SJF) arrival spread threshold.
    pub fn with_compact_arrival_spread(mut self, spread: i64) -> Self {
        self.compact_arrival_spread = spread;
        self
    }

    /// Sets the wide (Round Robin) arrival spread threshold.
    pub fn with_wide_arrival_spread(mut self, spread: i64) -> Self {
        self.wide_arrival_spread = spread;
        self
    }
}

/// Configuration shared by every simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Round Robin time quantum (must be ≥ 1).
    pub quantum: i64,
    /// Auto-classifier thresholds.
    pub thresholds: ClassifierThresholds,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            thresholds: ClassifierThresholds::default(),
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the classifier thresholds.
    pub fn with_thresholds(mut self, thresholds: ClassifierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Rejects values that would stall the simulation.
    pub fn validate(&self) -> Result<()> {
        if self.quantum < 1 {
            return Err(ScheduleError::invalid_config(format!(
                "quantum must be at least 1, got {}",
                self.quantum
            )));
        }
        Ok(())
    }

    /// Default configuration with `CPU_SCHED_*` environment overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults; present keys must parse as integers.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: i64| -> Result<i64> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => raw.trim().parse().map_err(|_| {
                    ScheduleError::invalid_config(format!("{key} must be an integer, got '{raw}'"))
                }),
            }
        };

        let defaults = Self::default();
        let config = Self {
            quantum: read(ENV_QUANTUM, defaults.quantum)?,
            thresholds: ClassifierThresholds {
                priority_spread: read(ENV_PRIORITY_SPREAD, defaults.thresholds.priority_spread)?,
                compact_arrival_spread: read(
                    ENV_COMPACT_ARRIVAL_SPREAD,
                    defaults.thresholds.compact_arrival_spread,
                )?,
                wide_arrival_spread: read(
                    ENV_WIDE_ARRIVAL_SPREAD,
                    defaults.thresholds.wide_arrival_spread,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }
}
