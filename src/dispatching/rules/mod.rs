//! Built-in dispatching rules.
//!
//! - **FIFO**: arrival time (FCFS)
//! - **SPT**: burst time (SJF)
//! - **PRIORITY**: priority value, lower first
//!
//! # Score Convention
//! All rules return lower scores for jobs that run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Job;

/// First In First Out.
///
/// Orders jobs by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.arrival
    }
}

/// Shortest Processing Time.
///
/// Orders jobs by burst. Minimizes average waiting time for a batch that
/// is entirely ready at t=0.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.burst
    }
}

/// Priority rule.
///
/// Lower `priority` value runs first. Jobs without a priority sort last.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.priority.map(i64::from).unwrap_or(RuleScore::MAX)
    }
}
