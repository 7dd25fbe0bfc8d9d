//! Input validation for process sets.
//!
//! Checks structural integrity of a process set before simulation.
//! Detects:
//! - Empty or reserved IDs
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive bursts
//!
//! Policies assume validated input; callers accepting processes from
//! users run these checks at the boundary.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Process, IDLE_PID};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty ID.
    EmptyId,
    /// A process uses the reserved idle ID.
    ReservedId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst is zero or negative.
    NonPositiveBurst,
    /// Round-robin quantum is below one.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. Every ID is non-empty
/// 2. No ID equals [`IDLE_PID`]
/// 3. No duplicate IDs
/// 4. All arrivals are `>= 0`
/// 5. All bursts are `>= 1`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {index} has an empty ID"),
            ));
        } else if p.id == IDLE_PID {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                format!("Process ID '{IDLE_PID}' is reserved for idle time"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum < 1 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be at least 1, got {quantum}"),
        )]);
    }
    Ok(())
}
