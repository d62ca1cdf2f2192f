//! JSON-driven simulation requests.
//!
//! A [`SimulationRequest`] bundles an algorithm choice with its input so a
//! whole run can be described in one document:
//!
//! ```json
//! {"kind": "schedule", "algorithm": {"name": "round_robin"}, "jobs": [...]}
//! {"kind": "banker", "processes": [...], "available": [3, 3, 2]}
//! {"kind": "quantum_sweep", "quanta": [2, 4, 1], "jobs": [...]}
//! ```
//!
//! [`simulate`] validates the input, runs the kernel, and returns a
//! serializable [`SimulationOutput`]. Decode and validation failures share
//! the [`SimulationError`] type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::banker::{self, SafetyOutcome};
use crate::models::{Job, Process, Schedule};
use crate::scheduler::{Algorithm, QuantumSweep, ScheduleMetrics, Scheduler, SweepPoint};
use crate::validation::ValidationError;

/// One simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationRequest {
    /// Run one scheduling kernel.
    Schedule { algorithm: Algorithm, jobs: Vec<Job> },
    /// Banker's safety check.
    Banker {
        processes: Vec<Process>,
        available: Vec<i64>,
    },
    /// Round Robin under several quanta.
    QuantumSweep { quanta: Vec<i64>, jobs: Vec<Job> },
}

impl SimulationRequest {
    /// Parses a request from JSON.
    pub fn from_json(input: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Output of [`simulate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationOutput {
    Schedule {
        schedule: Schedule,
        metrics: ScheduleMetrics,
    },
    Banker { outcome: SafetyOutcome },
    QuantumSweep { points: Vec<SweepPoint> },
}

impl SimulationOutput {
    /// Serializes the output as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Errors from decoding or validating a request.
#[derive(Debug)]
pub enum SimulationError {
    /// Malformed JSON or unknown fields.
    Decode(serde_json::Error),
    /// Well-formed input that failed validation.
    Invalid(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Decode(e) => write!(f, "invalid request: {e}"),
            SimulationError::Invalid(errors) => {
                write!(f, "{} validation error(s)", errors.len())?;
                for e in errors {
                    write!(f, "\n  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Decode(e) => Some(e),
            SimulationError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> Self {
        SimulationError::Decode(e)
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::Invalid(errors)
    }
}

/// Validates and runs a request.
///
/// # Example
///
/// ```
/// use cpu_schedule::simulation::{simulate, SimulationOutput, SimulationRequest};
///
/// let request = SimulationRequest::from_json(r#"{
///     "kind": "schedule",
///     "algorithm": {"name": "fcfs"},
///     "jobs": [{"id": "P1", "burst": 5}, {"id": "P2", "burst": 3, "arrival": 1}]
/// }"#).unwrap();
///
/// match simulate(&request).unwrap() {
///     SimulationOutput::Schedule { schedule, .. } => {
///         assert_eq!(schedule.execution_order(), vec!["P1", "P2"]);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn simulate(request: &SimulationRequest) -> Result<SimulationOutput, SimulationError> {
    match request {
        SimulationRequest::Schedule { algorithm, jobs } => {
            let schedule = algorithm.run(jobs)?;
            let metrics = ScheduleMetrics::calculate(&schedule);
            Ok(SimulationOutput::Schedule { schedule, metrics })
        }
        SimulationRequest::Banker {
            processes,
            available,
        } => {
            let outcome = banker::check_safety(processes, available)?;
            Ok(SimulationOutput::Banker { outcome })
        }
        SimulationRequest::QuantumSweep { quanta, jobs } => {
            let points = QuantumSweep::new(quanta.clone()).run_validated(jobs)?;
            Ok(SimulationOutput::QuantumSweep { points })
        }
    }
}
