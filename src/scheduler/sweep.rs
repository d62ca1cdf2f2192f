//! Round Robin quantum sensitivity sweep.
//!
//! Runs the same job set under several quanta (every job's own quantum
//! overridden) to compare average waiting and turnaround. Each point is an
//! independent [`RoundRobin`] run over the same borrowed jobs, so the sweep
//! has no side effects and repeats exactly for a fixed quantum list.
//!
//! The classic three-point comparison perturbs a base quantum up and down.
//! Randomness is injected through a caller-supplied [`rand::Rng`]; seed it
//! for reproducible output.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{RoundRobin, ScheduleMetrics, Scheduler};
use crate::models::{Job, Schedule};
use crate::validation::{self, ValidationError};

/// One quantum's outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Quantum applied to every job in this run.
    pub quantum: i64,
    /// The Round Robin schedule under `quantum`.
    pub schedule: Schedule,
    /// Metrics computed from `schedule`.
    pub metrics: ScheduleMetrics,
}

/// A list of quanta to evaluate.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Job;
/// use cpu_schedule::scheduler::QuantumSweep;
///
/// let jobs = vec![Job::new("P1", 10), Job::new("P2", 5).with_arrival(1)];
/// let points = QuantumSweep::new(vec![2, 4, 1]).run(&jobs);
///
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[1].quantum, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumSweep {
    quanta: Vec<i64>,
}

impl QuantumSweep {
    /// Sweeps exactly the given quanta, in order.
    pub fn new(quanta: Vec<i64>) -> Self {
        Self { quanta }
    }

    /// `[base, base + up, max(1, base - down)]` with `up` and `down` drawn
    /// from `1..=spread`.
    pub fn perturbed<R: Rng + ?Sized>(base: i64, spread: i64, rng: &mut R) -> Self {
        let spread = spread.max(1);
        let up = rng.random_range(1..=spread);
        let down = rng.random_range(1..=spread);
        Self::new(vec![base, base.saturating_add(up).max(1), base.saturating_sub(down).max(1)])
    }

    /// The quanta this sweep evaluates.
    pub fn quanta(&self) -> &[i64] {
        &self.quanta
    }

    /// Runs every quantum. Assumes validated input.
    pub fn run(&self, jobs: &[Job]) -> Vec<SweepPoint> {
        self.quanta
            .iter()
            .map(|&quantum| {
                let schedule = RoundRobin::new().with_quantum(quantum).schedule(jobs);
                let metrics = ScheduleMetrics::calculate(&schedule);
                SweepPoint {
                    quantum,
                    schedule,
                    metrics,
                }
            })
            .collect()
    }

    /// Validates the jobs and every quantum, then runs.
    pub fn run_validated(&self, jobs: &[Job]) -> Result<Vec<SweepPoint>, Vec<ValidationError>> {
        let mut errors = Vec::new();
        for &q in &self.quanta {
            if let Err(mut e) = validation::validate_quantum(q) {
                errors.append(&mut e);
            }
        }
        if let Err(mut e) = RoundRobin::new().with_quantum(1).validate(jobs) {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(self.run(jobs))
        } else {
            Err(errors)
        }
    }
}

/// The quantum the visualizer treats as "configured": the first job's.
pub fn base_quantum(jobs: &[Job]) -> Option<i64> {
    jobs.first().and_then(|j| j.quantum)
}

/// The point with the lowest average waiting time (first wins on ties).
pub fn best_by_waiting(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points.iter().reduce(|best, p| {
        if p.metrics.avg_waiting < best.metrics.avg_waiting {
            p
        } else {
            best
        }
    })
}
