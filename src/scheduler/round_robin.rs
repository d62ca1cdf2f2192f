//! Round Robin scheduling with arrivals.
//!
//! # Algorithm
//!
//! Each dispatch decision:
//! 1. Admit every pending job with `arrival <= now`, in arrival order.
//! 2. If nothing is ready but jobs are pending, idle-advance to the next
//!    arrival and admit again. No event is emitted for the gap.
//! 3. Dequeue the head, run it for `min(quantum, remaining)`, emit the slice.
//! 4. Admit jobs that arrived during (or exactly at the end of) the slice.
//! 5. Re-enqueue the job if it has work left, otherwise finalize its result.
//!
//! Step 4 precedes step 5, so a job arriving exactly when a slice ends is
//! queued ahead of the job that was just preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::Scheduler;
use crate::models::{Job, JobResult, Schedule, ScheduleEvent};
use crate::validation::{self, JobRequirements, ValidationResult};

/// Quantum used when neither the scheduler nor the job provides one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Round Robin scheduler.
///
/// The quantum is taken per job (`Job::quantum`) unless a scalar override
/// is set with [`RoundRobin::with_quantum`], in which case every job uses it.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Job;
/// use cpu_schedule::scheduler::{RoundRobin, Scheduler};
///
/// let jobs = vec![Job::new("P1", 3), Job::new("P2", 2)];
/// let schedule = RoundRobin::new().with_quantum(2).run(&jobs).unwrap();
///
/// let slices: Vec<_> = schedule
///     .events
///     .iter()
///     .map(|e| (e.job_id.as_str(), e.start_time, e.end_time))
///     .collect();
/// assert_eq!(slices, vec![("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 5)]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Option<i64>,
}

impl RoundRobin {
    /// Creates a scheduler that reads each job's own quantum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `quantum` for every job, ignoring per-job values.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// The scalar override, if any.
    pub fn quantum(&self) -> Option<i64> {
        self.quantum
    }

    /// Starts a step-by-step run over `jobs`.
    pub fn start<'a>(&self, jobs: &'a [Job]) -> RoundRobinRun<'a> {
        RoundRobinRun::new(jobs, self.quantum)
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn requirements(&self) -> JobRequirements {
        if self.quantum.is_some() {
            JobRequirements::basic()
        } else {
            JobRequirements::basic().with_quantum()
        }
    }

    fn validate(&self, jobs: &[Job]) -> ValidationResult {
        let mut errors = Vec::new();
        if let Some(q) = self.quantum {
            if let Err(mut e) = validation::validate_quantum(q) {
                errors.append(&mut e);
            }
        }
        if let Err(mut e) = validation::validate_jobs(jobs, self.requirements()) {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn schedule(&self, jobs: &[Job]) -> Schedule {
        let mut run = self.start(jobs);
        while run.step().is_some() {}
        run.finish()
    }
}

/// An in-progress Round Robin simulation.
///
/// Owns private remaining-burst counters; the borrowed jobs are never
/// modified, so several runs over the same slice are independent.
#[derive(Debug, Clone)]
pub struct RoundRobinRun<'a> {
    jobs: &'a [Job],
    quantum: Option<i64>,
    now: i64,
    /// Not yet arrived, sorted by arrival (stable).
    pending: VecDeque<usize>,
    ready: VecDeque<usize>,
    remaining: Vec<i64>,
    first_response: Vec<Option<i64>>,
    schedule: Schedule,
}

impl<'a> RoundRobinRun<'a> {
    fn new(jobs: &'a [Job], quantum: Option<i64>) -> Self {
        let mut pending: Vec<usize> = (0..jobs.len()).collect();
        pending.sort_by_key(|&i| jobs[i].arrival);

        Self {
            jobs,
            quantum,
            now: 0,
            pending: pending.into(),
            ready: VecDeque::new(),
            remaining: jobs.iter().map(|j| j.burst).collect(),
            first_response: vec![None; jobs.len()],
            schedule: Schedule::new(),
        }
    }

    /// Current simulation clock.
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Ready-queue job ids, head first.
    pub fn ready_queue(&self) -> Vec<&'a str> {
        let jobs = self.jobs;
        self.ready.iter().map(|&i| jobs[i].id.as_str()).collect()
    }

    /// Ids of jobs that have not arrived yet, in arrival order.
    pub fn pending(&self) -> Vec<&'a str> {
        let jobs = self.jobs;
        self.pending.iter().map(|&i| jobs[i].id.as_str()).collect()
    }

    /// Remaining burst of a job, if the id exists.
    pub fn remaining_burst(&self, job_id: &str) -> Option<i64> {
        self.jobs
            .iter()
            .position(|j| j.id == job_id)
            .map(|i| self.remaining[i])
    }

    /// Whether every job has finished.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty()
    }

    /// The schedule built so far.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Consumes the run and returns its schedule.
    pub fn finish(self) -> Schedule {
        self.schedule
    }

    /// Performs one dispatch and returns the slice that ran.
    ///
    /// Returns `None` once every job has finished.
    pub fn step(&mut self) -> Option<ScheduleEvent> {
        self.admit_arrivals();

        if self.ready.is_empty() {
            let &next = self.pending.front()?;
            self.now = self.now.max(self.jobs[next].arrival);
            self.admit_arrivals();
        }

        let index = self.ready.pop_front()?;
        let jobs = self.jobs;
        let job = &jobs[index];

        let first_response = *self.first_response[index].get_or_insert(self.now);

        let slice = self.quantum_for(job).min(self.remaining[index]);
        let start = self.now;
        self.now += slice;
        self.remaining[index] -= slice;

        let event = ScheduleEvent::new(&job.id, start, self.now);
        self.schedule.add_event(event.clone());

        // Arrivals first, then the preempted job.
        self.admit_arrivals();

        if self.remaining[index] > 0 {
            self.ready.push_back(index);
        } else {
            self.schedule.add_result(
                JobResult::new(&job.id, job.burst, job.arrival, first_response, self.now)
                    .with_priority(job.priority)
                    .with_queue_level(job.queue_level),
            );
        }

        Some(event)
    }

    fn admit_arrivals(&mut self) {
        while let Some(&next) = self.pending.front() {
            if self.jobs[next].arrival > self.now {
                break;
            }
            self.pending.pop_front();
            self.ready.push_back(next);
        }
    }

    fn quantum_for(&self, job: &Job) -> i64 {
        self.quantum
            .or(job.quantum)
            .unwrap_or(DEFAULT_QUANTUM)
            .max(1)
    }
}

impl Iterator for RoundRobinRun<'_> {
    type Item = ScheduleEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}
