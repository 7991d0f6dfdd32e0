//! Rule engine for eligible-process selection.
//!
//! Composes a primary selection rule with optional tie-breakers. When all
//! rules tie, the process found first in scan order wins.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{SelectionContext, SelectionRule};
use crate::models::Process;

/// A composable rule engine for picking the next process to dispatch.
///
/// Rules are applied in sequence; a later rule is consulted only when all
/// earlier ones tie exactly.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::RuleEngine;
/// use cpu_sched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestResponseRatio)
///     .with_tie_breaker(rules::ShortestBurst);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every eligible process ties, so the engine degrades to
    /// earliest-in-scan-order selection.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted after all previously added rules.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Returns the index of the best eligible process.
    ///
    /// A process is eligible iff it has arrived by `context.current_time`
    /// and `completed[i]` is false. Returns `None` when nothing is eligible.
    pub fn select_eligible(
        &self,
        processes: &[Process],
        completed: &[bool],
        context: &SelectionContext,
    ) -> Option<usize> {
        let mut best: Option<usize> = None;

        for (i, process) in processes.iter().enumerate() {
            if completed[i] || !process.has_arrived(context.current_time) {
                continue;
            }
            best = match best {
                Some(b) if self.compare(process, &processes[b], context) != Ordering::Less => {
                    Some(b)
                }
                _ => Some(i),
            };
        }

        best
    }

    fn compare(&self, a: &Process, b: &Process, context: &SelectionContext) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.compare(a, b, context))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
