//! Error types for simulation requests.
//!
//! Every failure is returned to the caller as a [`ScheduleError`]; the
//! simulation is pure, so no error is transient.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by parsing, validation, configuration and simulation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScheduleError {
    /// Policy selector is not one of FCFS, RR, SJF, LJF, Priority, HRRN, Auto.
    #[error("Unknown scheduling policy '{0}'. Valid: FCFS, RR, SJF, LJF, Priority, HRRN, Auto")]
    UnknownPolicy(String),

    /// A textual process record could not be parsed.
    #[error("Malformed record {record}: {reason}")]
    MalformedRecord {
        /// 1-based position of the record in the input.
        record: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// No processes to schedule.
    #[error("Empty input: at least one process is required")]
    EmptyInput,

    /// Process set failed validation.
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Configuration value out of range or unparsable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScheduleError {
    /// Create a malformed record error
    #[inline]
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record,
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    #[inline]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for fallible simulation operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
