//! Simulation state passed to selection rules.

/// Runtime state visible to selection rules at a decision point.
///
/// All times are integer units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SelectionContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Moves the clock forward to `time` if it is later.
    pub fn advance_to(&mut self, time: i64) {
        self.current_time = self.current_time.max(time);
    }
}
