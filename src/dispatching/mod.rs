//! Dispatching rules and rule engine for job ordering.
//!
//! The non-preemptive kernels (FCFS, SJF, Priority, and the per-tier pass
//! of Multilevel Queue) differ only in the key they sort jobs by. Those keys
//! are expressed as dispatching rules and composed by a [`RuleEngine`].
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine};
//! use cpu_schedule::models::Job;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_rule(rules::Fifo);
//!
//! let jobs = vec![Job::new("P1", 5), Job::new("P2", 3)];
//! assert_eq!(engine.sort_indices(&jobs), vec![1, 0]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A dispatching rule that scores a job.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for jobs
/// that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Scores a job. Lower = dispatched earlier.
    fn evaluate(&self, job: &Job) -> RuleScore;
}
