//! Job model.
//!
//! A job is one synthetic CPU-bound unit of work submitted to a scheduler.
//! Which optional fields matter depends on the algorithm: Priority reads
//! `priority`, per-job Round Robin reads `quantum`, Multilevel Queue reads
//! `queue_level`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A job submitted for CPU scheduling.
///
/// Jobs are immutable once handed to a scheduler. Schedulers that need a
/// mutable remaining-burst counter keep their own copy.
///
/// # Time Representation
/// All times are abstract integer ticks relative to the simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier (e.g. "P1").
    pub id: String,
    /// Time at which the job becomes eligible to run.
    #[serde(default)]
    pub arrival: i64,
    /// Total CPU time the job requires.
    pub burst: i64,
    /// Scheduling priority (lower value = higher priority).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Round Robin time slice for this job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Multilevel Queue tier (lower value = higher tier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_level: Option<i32>,
}

impl Job {
    /// Creates a job arriving at t=0 with the given burst.
    pub fn new(id: impl Into<String>, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival: 0,
            burst,
            priority: None,
            quantum: None,
            queue_level: None,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival: i64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the per-job Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the Multilevel Queue tier.
    pub fn with_queue_level(mut self, level: i32) -> Self {
        self.queue_level = Some(level);
        self
    }
}
