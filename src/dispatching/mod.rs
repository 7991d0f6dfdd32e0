//! Selection rules and rule engine for non-preemptive dispatch.
//!
//! Provides scoring rules (shortest burst, longest burst, highest response
//! ratio) and a rule engine that picks the best *eligible* process from a
//! ready set. SJF, LJF and HRRN share this one selection path.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{RuleEngine, SelectionContext};
//! use cpu_sched::dispatching::rules;
//! use cpu_sched::models::Process;
//!
//! let processes = vec![Process::new(1, 0, 8, 0), Process::new(2, 0, 3, 0)];
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//!
//! let context = SelectionContext::at_time(0);
//! let best = engine.select_eligible(&processes, &[false, false], &context);
//! assert_eq!(best, Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::SelectionContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A rule that scores a process for dispatch.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that prefer larger quantities
/// (longest burst, highest response ratio) return the negated quantity.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "HRRN").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current simulation state.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SelectionContext) -> RuleScore;

    /// Orders two processes; `Less` means `a` should run before `b`.
    ///
    /// Defaults to comparing scores exactly. Rules whose score is a derived
    /// ratio override this to compare in integer arithmetic.
    fn compare(&self, a: &Process, b: &Process, context: &SelectionContext) -> Ordering {
        self.evaluate(a, context)
            .partial_cmp(&self.evaluate(b, context))
            .unwrap_or(Ordering::Equal)
    }
}
