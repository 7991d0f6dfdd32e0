//! Input validation for simulation requests.
//!
//! Checks structural integrity of a process set before any policy runs.
//! Detects:
//! - Empty input
//! - Non-positive burst times (would stall idle stepping and divide by zero
//!   in the response ratio)
//! - Time ranges whose schedule would not fit in `i64`
//!
//! Repeated IDs and negative arrivals are accepted. Processes are told apart
//! by input position, and the clock starts at t=0 regardless of arrivals.

use crate::error::ScheduleError;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// Completion or turnaround times could exceed the `i64` range.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. Every burst time is positive
/// 3. `max(0, latest arrival) + total burst - earliest arrival` fits in
///    `i64`, which bounds every clock value and turnaround
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        )]);
    }

    let mut errors = Vec::new();

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times overflow the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Longest possible turnaround, or `None` if any clock value could overflow.
fn time_horizon(processes: &[Process]) -> Option<i64> {
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst_time.max(0)))?;
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    let earliest_arrival = processes.iter().map(|p| p.arrival_time).min()?;

    latest_arrival
        .max(0)
        .checked_add(total_burst)?
        .checked_sub(earliest_arrival)
}

/// Runs [`validate_input`] and lifts failures into a [`ScheduleError`].
///
/// An empty set maps to [`ScheduleError::EmptyInput`]; everything else to
/// [`ScheduleError::InvalidInput`].
pub fn ensure_valid(processes: &[Process]) -> Result<(), ScheduleError> {
    validate_input(processes).map_err(|errors| {
        if errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyInput)
        {
            ScheduleError::EmptyInput
        } else {
            ScheduleError::InvalidInput(errors)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5, 2),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 8, 4),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_processes()).is_ok());
        assert!(ensure_valid(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_input(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
        assert_eq!(ensure_valid(&[]).unwrap_err(), ScheduleError::EmptyInput);
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1, 0, 0, 0)];
        let errors = validate_input(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_burst() {
        let processes = vec![Process::new(1, 0, -3, 0)];
        let errors = validate_input(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_repeated_ids_and_negative_arrivals_accepted() {
        let processes = vec![Process::new(1, -4, 2, 0), Process::new(1, 2, 1, 0)];
        assert!(validate_input(&processes).is_ok());
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let processes = vec![Process::new(1, i64::MAX - 6, 10, 0)];
        let errors = validate_input(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let bursts = vec![Process::new(1, 0, i64::MAX, 0), Process::new(2, 0, 1, 0)];
        assert!(validate_input(&bursts).is_err());
    }

    #[test]
    fn test_turnaround_overflow_rejected() {
        let processes = vec![Process::new(1, i64::MIN, 1, 0)];
        let err = ensure_valid(&processes).unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_time_range_at_limit_accepted() {
        let processes = vec![Process::new(1, i64::MAX - 10, 10, 0)];
        assert!(validate_input(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let processes = vec![
            Process::new(1, 0, 0, 0),
            Process::new(2, 3, -2, 0),
            Process::new(3, 0, i64::MAX, 0),
            Process::new(4, 1, 5, 0),
        ];
        let err = ensure_valid(&processes).unwrap_err();
        match err {
            ScheduleError::InvalidInput(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
