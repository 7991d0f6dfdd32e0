//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use std::cmp::Ordering;

use super::{RuleScore, SelectionContext, SelectionRule};
use crate::models::Process;

/// Shortest burst first.
///
/// Minimizes average waiting time among processes that are all ready.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext) -> RuleScore {
        process.burst_time as f64
    }
}

/// Longest burst first.
#[derive(Debug, Clone, Copy)]
pub struct LongestBurst;

impl SelectionRule for LongestBurst {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn evaluate(&self, process: &Process, _context: &SelectionContext) -> RuleScore {
        -(process.burst_time as f64)
    }
}

/// Highest response ratio first.
///
/// `ratio = (waited + burst) / burst`, recomputed at every decision point,
/// so long-waiting processes age toward the front and cannot starve.
///
/// # Reference
/// Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"
#[derive(Debug, Clone, Copy)]
pub struct HighestResponseRatio;

impl SelectionRule for HighestResponseRatio {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn evaluate(&self, process: &Process, context: &SelectionContext) -> RuleScore {
        -process.response_ratio(context.current_time) // Higher ratio = higher priority → negate
    }

    /// Cross-multiplies `(waited + burst) / burst` so that ratios closer
    /// than an `f64` ulp still order correctly. Bursts are positive.
    fn compare(&self, a: &Process, b: &Process, context: &SelectionContext) -> Ordering {
        let numerator = |p: &Process| {
            let waited = i128::from(context.current_time) - i128::from(p.arrival_time);
            waited + i128::from(p.burst_time)
        };
        let lhs = numerator(a) * i128::from(b.burst_time);
        let rhs = numerator(b) * i128::from(a.burst_time);
        rhs.cmp(&lhs)
    }
}
