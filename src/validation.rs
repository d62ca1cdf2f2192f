//! Input validation for scheduling and safety-check runs.
//!
//! Checks structural integrity of jobs and processes before any kernel
//! runs. Detects:
//! - Missing or duplicate IDs
//! - Non-positive bursts and negative arrivals
//! - Fields an algorithm needs but a job lacks (priority, quantum, queue level)
//! - Malformed resource vectors (length mismatch, negative units)
//! - Allocations exceeding the declared maximum
//! - Timelines or resource totals that do not fit in `i64`
//!
//! Every check runs; the caller receives all detected problems at once.

use crate::models::{Job, Process};
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job or process has an empty ID.
    MissingId,
    /// Two entities share the same ID.
    DuplicateId,
    /// Burst time is zero or negative.
    InvalidBurst,
    /// Arrival time is negative.
    InvalidArrival,
    /// A field the selected algorithm requires is absent.
    MissingField,
    /// Round Robin quantum is zero or negative.
    InvalidQuantum,
    /// Multilevel Queue tier is zero or negative.
    InvalidQueueLevel,
    /// Resource vectors have differing lengths.
    DimensionMismatch,
    /// A resource vector holds a negative count.
    NegativeResource,
    /// A process holds more of a resource than its maximum claim.
    AllocationExceedsMaximum,
    /// A time or resource total would not fit in `i64`.
    Overflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Optional job fields a scheduler depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobRequirements {
    /// Every job must carry a priority.
    pub priority: bool,
    /// Every job must carry a positive quantum.
    pub quantum: bool,
    /// Every job must carry a positive queue level.
    pub queue_level: bool,
}

impl JobRequirements {
    /// Only `id`, `arrival`, and `burst` are checked.
    pub fn basic() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self) -> Self {
        self.priority = true;
        self
    }

    pub fn with_quantum(mut self) -> Self {
        self.quantum = true;
        self
    }

    pub fn with_queue_level(mut self) -> Self {
        self.queue_level = true;
        self
    }
}

/// Validates a job list against the fields a scheduler requires.
///
/// Checks:
/// 1. Every job has a non-empty, unique ID
/// 2. `burst > 0` and `arrival >= 0`
/// 3. Required optional fields are present
/// 4. A present quantum or queue level is positive (even when not required)
/// 5. `max(arrival) + Σ burst` fits in `i64`, which bounds every completion
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job], requirements: JobRequirements) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, job) in jobs.iter().enumerate() {
        if job.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Job at position {index} has no ID"),
            ));
        } else if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Job '{}' has non-positive burst {}", job.id, job.burst),
            ));
        }

        if job.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Job '{}' has negative arrival {}", job.id, job.arrival),
            ));
        }

        if requirements.priority && job.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Job '{}' has no priority", job.id),
            ));
        }

        match job.quantum {
            Some(q) if q <= 0 => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Job '{}' has non-positive quantum {q}", job.id),
            )),
            None if requirements.quantum => errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Job '{}' has no quantum", job.id),
            )),
            _ => {}
        }

        match job.queue_level {
            Some(level) if level <= 0 => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQueueLevel,
                format!("Job '{}' has non-positive queue level {level}", job.id),
            )),
            None if requirements.queue_level => errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Job '{}' has no queue level", job.id),
            )),
            _ => {}
        }
    }

    if time_horizon(jobs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::Overflow,
            "Latest arrival plus total burst exceeds the i64 time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest possible completion time, `max(arrival) + Σ burst`.
///
/// `None` when the sum overflows. Out-of-range fields count as 0; they are
/// reported separately.
fn time_horizon(jobs: &[Job]) -> Option<i64> {
    let latest_arrival = jobs.iter().map(|j| j.arrival.max(0)).max().unwrap_or(0);
    jobs.iter()
        .try_fold(latest_arrival, |acc, j| acc.checked_add(j.burst.max(0)))
}

/// Validates a scalar Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )])
    }
}

/// Validates Banker's input.
///
/// Checks:
/// 1. Every process has a non-empty, unique ID
/// 2. Every `maximum` and `allocation` has the same length as `available`
/// 3. No vector holds a negative count
/// 4. `allocation[i] <= maximum[i]` for every process and dimension
/// 5. `available[i] + Σ allocation[i]` fits in `i64` for every dimension
pub fn validate_processes(processes: &[Process], available: &[i64]) -> ValidationResult {
    let mut errors = Vec::new();
    let dims = available.len();

    if available.iter().any(|&v| v < 0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeResource,
            format!("Available vector {available:?} has a negative count"),
        ));
    }

    let mut ids = HashSet::new();
    for (index, process) in processes.iter().enumerate() {
        if process.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Process at position {index} has no ID"),
            ));
        } else if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.maximum.len() != dims || process.allocation.len() != dims {
            errors.push(ValidationError::new(
                ValidationErrorKind::DimensionMismatch,
                format!(
                    "Process '{}' has maximum of length {} and allocation of length {}, expected {dims}",
                    process.id,
                    process.maximum.len(),
                    process.allocation.len()
                ),
            ));
            continue;
        }

        if process
            .maximum
            .iter()
            .chain(&process.allocation)
            .any(|&v| v < 0)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeResource,
                format!("Process '{}' has a negative resource count", process.id),
            ));
        }

        for (i, (alloc, max)) in process.allocation.iter().zip(&process.maximum).enumerate() {
            if alloc > max {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AllocationExceedsMaximum,
                    format!(
                        "Process '{}' holds {alloc} of resource {i} but claims at most {max}",
                        process.id
                    ),
                ));
            }
        }
    }

    for (i, &units) in available.iter().enumerate() {
        let total = processes
            .iter()
            .filter(|p| p.allocation.len() == dims)
            .try_fold(units.max(0), |acc, p| acc.checked_add(p.allocation[i].max(0)));
        if total.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overflow,
                format!("Total units of resource {i} exceed the i64 range"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
