//! Non-preemptive sequential schedulers: FCFS, SJF, and Priority.
//!
//! # Algorithm
//!
//! 1. Order jobs with a dispatching rule engine (stable; ties keep input order).
//! 2. Walk the ordered jobs with a running clock.
//! 3. When arrivals are honored and the clock is behind a job's arrival,
//!    idle-advance the clock to that arrival.
//! 4. Run each job to completion in one slice.
//!
//! SJF and Priority model a single batch ready at t=0: they ignore
//! `arrival` and report an effective arrival of 0.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use super::Scheduler;
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Job, JobResult, Schedule, ScheduleEvent};
use crate::validation::JobRequirements;

/// Runs `order` back to back starting at `start_time`, appending to `schedule`.
///
/// With `honor_arrival`, the clock idle-advances to each job's arrival and
/// results use that arrival; otherwise every job is treated as arriving at
/// t=0. Returns the clock after the last job.
pub(crate) fn run_to_completion<'a>(
    order: impl IntoIterator<Item = &'a Job>,
    honor_arrival: bool,
    start_time: i64,
    schedule: &mut Schedule,
) -> i64 {
    let mut current_time = start_time;

    for job in order {
        let arrival = if honor_arrival { job.arrival } else { 0 };
        if current_time < arrival {
            current_time = arrival;
        }

        let start = current_time;
        let end = start + job.burst;

        schedule.add_event(ScheduleEvent::new(&job.id, start, end));
        schedule.add_result(
            JobResult::new(&job.id, job.burst, arrival, start, end)
                .with_priority(job.priority)
                .with_queue_level(job.queue_level),
        );

        current_time = end;
    }

    current_time
}

/// Non-preemptive scheduler that runs jobs in rule-engine order.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Job;
/// use cpu_schedule::scheduler::{Scheduler, SequentialScheduler};
///
/// let jobs = vec![
///     Job::new("P1", 5),
///     Job::new("P2", 3).with_arrival(2),
///     Job::new("P3", 1).with_arrival(1),
/// ];
/// let schedule = SequentialScheduler::fcfs().schedule(&jobs);
/// assert_eq!(schedule.execution_order(), vec!["P1", "P3", "P2"]);
/// ```
#[derive(Debug, Clone)]
pub struct SequentialScheduler {
    name: &'static str,
    rule_engine: RuleEngine,
    honor_arrival: bool,
    requirements: JobRequirements,
}

impl SequentialScheduler {
    /// First-Come-First-Served: order by arrival, honor idle gaps.
    pub fn fcfs() -> Self {
        Self {
            name: "FCFS",
            rule_engine: RuleEngine::new().with_rule(rules::Fifo),
            honor_arrival: true,
            requirements: JobRequirements::basic(),
        }
    }

    /// Shortest-Job-First over a batch ready at t=0.
    pub fn sjf() -> Self {
        Self {
            name: "SJF",
            rule_engine: RuleEngine::new().with_rule(rules::Spt),
            honor_arrival: false,
            requirements: JobRequirements::basic(),
        }
    }

    /// Priority scheduling over a batch ready at t=0 (lower value first).
    pub fn priority() -> Self {
        Self {
            name: "Priority",
            rule_engine: RuleEngine::new().with_rule(rules::Priority),
            honor_arrival: false,
            requirements: JobRequirements::basic().with_priority(),
        }
    }

    /// Replaces the ordering rules.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Whether the clock waits for each job's arrival.
    pub fn honors_arrival(&self) -> bool {
        self.honor_arrival
    }
}

impl Scheduler for SequentialScheduler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn requirements(&self) -> JobRequirements {
        self.requirements
    }

    fn schedule(&self, jobs: &[Job]) -> Schedule {
        let mut schedule = Schedule::new();
        let order = self.rule_engine.sort(jobs);
        run_to_completion(order, self.honor_arrival, 0, &mut schedule);
        schedule
    }
}
