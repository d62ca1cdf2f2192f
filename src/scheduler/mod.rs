//! CPU scheduling kernels and schedule metrics.
//!
//! Every kernel implements [`Scheduler`]: a pure function from a borrowed
//! job slice to a [`Schedule`]. [`Algorithm`] is the tagged variant that
//! selects one kernel by name.
//!
//! # Kernels
//!
//! | Algorithm | Type | Preemptive | Uses arrival |
//! |-----------|------|------------|--------------|
//! | FCFS | [`SequentialScheduler::fcfs`] | no | yes |
//! | SJF | [`SequentialScheduler::sjf`] | no | no |
//! | Priority | [`SequentialScheduler::priority`] | no | no |
//! | Round Robin | [`RoundRobin`] | quantum | yes |
//! | Multilevel Queue | [`MultilevelQueue`] | no | yes (per tier) |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod kpi;
mod multilevel;
mod round_robin;
mod sequential;
mod sweep;

pub use kpi::{format_two_decimals, ScheduleMetrics};
pub use multilevel::MultilevelQueue;
pub use round_robin::{RoundRobin, RoundRobinRun, DEFAULT_QUANTUM};
pub use sequential::SequentialScheduler;
pub use sweep::{base_quantum, best_by_waiting, QuantumSweep, SweepPoint};

use serde::{Deserialize, Serialize};

use crate::models::{Job, Schedule};
use crate::validation::{self, JobRequirements, ValidationError, ValidationResult};

/// A CPU scheduling kernel.
///
/// `schedule` never mutates its input and is deterministic: the same jobs
/// always yield the same schedule.
pub trait Scheduler {
    /// Display name (e.g. "FCFS").
    fn name(&self) -> &'static str;

    /// Optional job fields this kernel reads.
    fn requirements(&self) -> JobRequirements;

    /// Simulates `jobs`. Assumes the input passed [`Scheduler::validate`].
    fn schedule(&self, jobs: &[Job]) -> Schedule;

    /// Checks `jobs` against this kernel's requirements.
    fn validate(&self, jobs: &[Job]) -> ValidationResult {
        validation::validate_jobs(jobs, self.requirements())
    }

    /// Validates, then simulates.
    fn run(&self, jobs: &[Job]) -> Result<Schedule, Vec<ValidationError>> {
        self.validate(jobs)?;
        Ok(self.schedule(jobs))
    }
}

/// Scheduling algorithm selector.
///
/// Serialized with a `name` tag, e.g. `{"name": "round_robin", "quantum": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin {
        /// Scalar quantum; `None` reads each job's own quantum.
        #[serde(default)]
        quantum: Option<i64>,
    },
    MultilevelQueue,
}

impl Algorithm {
    fn with_kernel<T>(&self, f: impl FnOnce(&dyn Scheduler) -> T) -> T {
        match *self {
            Algorithm::Fcfs => f(&SequentialScheduler::fcfs()),
            Algorithm::Sjf => f(&SequentialScheduler::sjf()),
            Algorithm::Priority => f(&SequentialScheduler::priority()),
            Algorithm::RoundRobin { quantum } => {
                let rr = match quantum {
                    Some(q) => RoundRobin::new().with_quantum(q),
                    None => RoundRobin::new(),
                };
                f(&rr)
            }
            Algorithm::MultilevelQueue => f(&MultilevelQueue::new()),
        }
    }
}

impl Scheduler for Algorithm {
    fn name(&self) -> &'static str {
        self.with_kernel(|k| k.name())
    }

    fn requirements(&self) -> JobRequirements {
        self.with_kernel(|k| k.requirements())
    }

    fn schedule(&self, jobs: &[Job]) -> Schedule {
        self.with_kernel(|k| k.schedule(jobs))
    }

    fn validate(&self, jobs: &[Job]) -> ValidationResult {
        self.with_kernel(|k| k.validate(jobs))
    }
}
