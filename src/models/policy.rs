//! Scheduling policy selector.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// The closed set of scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Round Robin with a fixed quantum.
    RoundRobin,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Longest Job First (non-preemptive).
    Ljf,
    /// Lowest priority value first (non-preemptive).
    Priority,
    /// Highest Response Ratio Next.
    Hrrn,
    /// Heuristic selection among the policies above.
    Auto,
}

impl Policy {
    /// Every selectable policy, in display order.
    pub const ALL: [Policy; 7] = [
        Policy::Fcfs,
        Policy::RoundRobin,
        Policy::Sjf,
        Policy::Ljf,
        Policy::Priority,
        Policy::Hrrn,
        Policy::Auto,
    ];

    /// Canonical selector name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::RoundRobin => "RR",
            Self::Sjf => "SJF",
            Self::Ljf => "LJF",
            Self::Priority => "Priority",
            Self::Hrrn => "HRRN",
            Self::Auto => "Auto",
        }
    }

    /// Human-readable policy name.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::RoundRobin => "Round Robin",
            Self::Sjf => "Shortest Job First",
            Self::Ljf => "Longest Job First",
            Self::Priority => "Priority Scheduling",
            Self::Hrrn => "Highest Response Ratio Next",
            Self::Auto => "Automatic Selection",
        }
    }
}

impl FromStr for Policy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Policy::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ScheduleError::UnknownPolicy(name.to_string()))
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
