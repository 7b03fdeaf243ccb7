//! Input validation for process lists.
//!
//! Checks structural integrity of the process list before simulation.
//! Detects:
//! - Empty input (average waiting time would be undefined)
//! - Negative arrival times
//! - Zero or negative burst times
//! - Lists whose schedule horizon (`max(arrival) + sum(burst)`) does not
//!   fit in `i64`
//!
//! Arrival ordering is NOT validated. FCFS and SRTF admit processes in
//! list order and produce list-order results on unsorted input; see
//! [`crate::models::is_sorted_by_arrival`].

use crate::error::SimError;
use crate::models::{Process, ProcessId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending list position (`None` for list-level errors).
    pub index: Option<usize>,
    /// Offending process id.
    pub id: Option<ProcessId>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyInput,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time or a negative amount.
    NonPositiveBurst,
    /// The latest arrival plus all bursts overflows the clock.
    HorizonOverflow,
}

impl ValidationError {
    fn for_process(
        kind: ValidationErrorKind,
        index: usize,
        process: &Process,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            index: Some(index),
            id: Some(process.id),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for SimError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ValidationErrorKind::EmptyInput => SimError::EmptyInput,
            _ => SimError::InvalidProcess {
                index: err.index.unwrap_or_default(),
                id: err.id.unwrap_or_default(),
                reason: err.message,
            },
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. The list is not empty
/// 2. Every arrival time is non-negative
/// 3. Every burst time is positive
/// 4. `max(arrival) + sum(burst)` fits in `i64`, which bounds every clock
///    value a discipline can reach
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError {
            kind: ValidationErrorKind::EmptyInput,
            index: None,
            id: None,
            message: "Process list is empty".into(),
        });
    }

    for (index, p) in processes.iter().enumerate() {
        if p.arrival_time < 0 {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::NegativeArrival,
                index,
                p,
                format!("Arrival time {} is negative", p.arrival_time),
            ));
        }
        if p.burst_time <= 0 {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::NonPositiveBurst,
                index,
                p,
                format!("Burst time {} is not positive", p.burst_time),
            ));
        }
    }

    if errors.is_empty() {
        if let Some((index, p)) = horizon_overflow(processes) {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::HorizonOverflow,
                index,
                p,
                "Latest arrival plus total burst time overflows the clock",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// First process at which `max(arrival) + sum(burst)` overflows.
///
/// Assumes non-negative arrivals and positive bursts.
fn horizon_overflow(processes: &[Process]) -> Option<(usize, &Process)> {
    let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let mut horizon = latest;
    for (index, p) in processes.iter().enumerate() {
        match horizon.checked_add(p.burst_time) {
            Some(h) => horizon = h,
            None => return Some((index, p)),
        }
    }
    None
}

/// Validates a process list, failing on the first detected issue.
pub fn ensure_valid(processes: &[Process]) -> Result<(), SimError> {
    match validate_processes(processes) {
        Ok(()) => Ok(()),
        Err(errors) => Err(errors
            .into_iter()
            .next()
            .map(SimError::from)
            .unwrap_or(SimError::EmptyInput)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
        assert!(validate_processes(&processes).is_ok());
        assert!(ensure_valid(&processes).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
        assert!(matches!(ensure_valid(&[]), Err(SimError::EmptyInput)));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1, 0, 5), Process::new(9, 2, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst && e.index == Some(1)));

        match ensure_valid(&processes) {
            Err(SimError::InvalidProcess { index, id, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(id, 9);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, -3, 5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new(1, -1, -2), Process::new(2, 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_horizon_overflow() {
        let half = i64::MAX / 2 + 1;
        let processes = vec![Process::new(1, 0, half), Process::new(2, 0, half)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);
        assert_eq!(errors[0].index, Some(1));
        assert!(matches!(
            ensure_valid(&processes),
            Err(SimError::InvalidProcess { index: 1, id: 2, .. })
        ));
    }

    #[test]
    fn test_horizon_at_limit_is_accepted() {
        let processes = vec![Process::new(1, 1, i64::MAX - 2), Process::new(2, 0, 1)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_unsorted_is_accepted() {
        let processes = vec![Process::new(1, 10, 1), Process::new(2, 0, 1)];
        assert!(validate_processes(&processes).is_ok());
    }
}
