//! Multilevel Queue scheduling.
//!
//! # Algorithm
//!
//! 1. Partition jobs by `queue_level`.
//! 2. Visit tiers in ascending level order (lower level = higher tier).
//! 3. Within a tier, run FCFS: stable by arrival, idle-advance to arrivals.
//! 4. The clock carries over between tiers.
//!
//! Tier order is fixed when the jobs are partitioned. A higher tier never
//! preempts a lower tier that is already running, even if its jobs arrived
//! earlier: a tier-2 job arriving at t=0 still waits for every tier-1 job.

use std::collections::BTreeMap;

use super::sequential::run_to_completion;
use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Job, Schedule};
use crate::validation::JobRequirements;

/// Non-preemptive Multilevel Queue scheduler with FCFS inside each tier.
#[derive(Debug, Clone, Default)]
pub struct MultilevelQueue;

impl MultilevelQueue {
    pub fn new() -> Self {
        Self
    }

    /// Jobs grouped by tier, tiers ascending, input order kept within a tier.
    pub fn partition(jobs: &[Job]) -> BTreeMap<i32, Vec<&Job>> {
        let mut tiers: BTreeMap<i32, Vec<&Job>> = BTreeMap::new();
        for job in jobs {
            // Unvalidated jobs without a tier fall into the lowest tier.
            let level = job.queue_level.unwrap_or(i32::MAX);
            tiers.entry(level).or_default().push(job);
        }
        tiers
    }
}

impl Scheduler for MultilevelQueue {
    fn name(&self) -> &'static str {
        "Multilevel Queue"
    }

    fn requirements(&self) -> JobRequirements {
        JobRequirements::basic().with_queue_level()
    }

    fn schedule(&self, jobs: &[Job]) -> Schedule {
        let mut schedule = Schedule::new();
        let fcfs = RuleEngine::new().with_rule(rules::Fifo);
        let mut current_time = 0;

        for mut tier in Self::partition(jobs).into_values() {
            fcfs.sort_refs(&mut tier);
            current_time = run_to_completion(tier, true, current_time, &mut schedule);
        }

        schedule
    }
}
