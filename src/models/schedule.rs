//! Schedule (simulation output) model.
//!
//! A schedule is the complete outcome of one scheduler run: the ordered
//! CPU timeline for a Gantt chart and one result row per job.

use serde::{Deserialize, Serialize};

/// The outcome of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// CPU slices in execution order.
    pub events: Vec<ScheduleEvent>,
    /// Per-job results in the order jobs finished.
    pub results: Vec<JobResult>,
}

/// One contiguous slice of CPU time given to a job.
///
/// Covers `[start_time, end_time)`. Round Robin may produce several
/// events for the same job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// Job that ran.
    pub job_id: String,
    /// Slice start.
    pub start_time: i64,
    /// Slice end (exclusive).
    pub end_time: i64,
    /// Length of the slice (`end_time - start_time`).
    pub burst_time: i64,
}

/// Final metrics for one job, produced after its last slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    /// Job identifier.
    pub id: String,
    /// Total CPU time the job required.
    pub burst: i64,
    /// Effective arrival used for the metrics.
    pub arrival: i64,
    /// Priority, when the job carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Multilevel Queue tier, when the job carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_level: Option<i32>,
    /// Time of the job's first dispatch.
    pub first_response_time: i64,
    /// Time the job's last slice ended.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst`.
    pub waiting_time: i64,
}

/// A span during which the CPU had nothing ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlePeriod {
    /// End of the previous slice (or 0).
    pub start_time: i64,
    /// Start of the next slice.
    pub end_time: i64,
}

/// One bar of the burst view: a job drawn once, at full burst width,
/// in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionBar {
    /// Job this bar represents.
    pub job_id: String,
    /// Bar width: the job's total CPU time.
    pub burst: i64,
    /// Effective arrival used for the job's result.
    pub arrival: i64,
    /// Time the job's last slice ended.
    pub completion: i64,
}

impl ScheduleEvent {
    /// Creates a slice `[start_time, end_time)`.
    pub fn new(job_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            job_id: job_id.into(),
            start_time,
            end_time,
            burst_time: end_time - start_time,
        }
    }
}

impl JobResult {
    /// Builds a result from the job's timing; derived fields are computed here.
    pub fn new(
        id: impl Into<String>,
        burst: i64,
        arrival: i64,
        first_response_time: i64,
        completion: i64,
    ) -> Self {
        let turnaround_time = completion - arrival;
        Self {
            id: id.into(),
            burst,
            arrival,
            priority: None,
            queue_level: None,
            first_response_time,
            completion,
            turnaround_time,
            waiting_time: turnaround_time - burst,
        }
    }

    pub fn with_priority(mut self, priority: Option<i32>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_queue_level(mut self, queue_level: Option<i32>) -> Self {
        self.queue_level = queue_level;
        self
    }

    /// Delay between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.first_response_time - self.arrival
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a CPU slice.
    pub fn add_event(&mut self, event: ScheduleEvent) {
        self.events.push(event);
    }

    /// Appends a finished job's result.
    pub fn add_result(&mut self, result: JobResult) {
        self.results.push(result);
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.results.is_empty()
    }

    /// Latest slice end, or 0 for an empty schedule.
    pub fn makespan(&self) -> i64 {
        self.events.iter().map(|e| e.end_time).max().unwrap_or(0)
    }

    /// Total time the CPU spent running jobs.
    pub fn busy_time(&self) -> i64 {
        self.events.iter().map(|e| e.burst_time).sum()
    }

    /// Job ids in the order they were first dispatched.
    pub fn execution_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for event in &self.events {
            if !order.contains(&event.job_id.as_str()) {
                order.push(&event.job_id);
            }
        }
        order
    }

    /// All slices belonging to one job.
    pub fn events_for_job(&self, job_id: &str) -> Vec<&ScheduleEvent> {
        self.events.iter().filter(|e| e.job_id == job_id).collect()
    }

    /// The result row for one job.
    pub fn result_for_job(&self, job_id: &str) -> Option<&JobResult> {
        self.results.iter().find(|r| r.id == job_id)
    }

    /// Gaps between consecutive slices (and before the first one).
    pub fn idle_periods(&self) -> Vec<IdlePeriod> {
        let mut idle = Vec::new();
        let mut cursor = 0;
        for event in &self.events {
            if event.start_time > cursor {
                idle.push(IdlePeriod {
                    start_time: cursor,
                    end_time: event.start_time,
                });
            }
            cursor = cursor.max(event.end_time);
        }
        idle
    }

    /// One bar per job ordered by completion (ties keep result order).
    pub fn completion_bars(&self) -> Vec<CompletionBar> {
        let mut bars: Vec<CompletionBar> = self
            .results
            .iter()
            .map(|r| CompletionBar {
                job_id: r.id.clone(),
                burst: r.burst,
                arrival: r.arrival,
                completion: r.completion,
            })
            .collect();
        bars.sort_by_key(|b| b.completion);
        bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_event(ScheduleEvent::new("P1", 2, 4));
        s.add_event(ScheduleEvent::new("P2", 4, 5));
        s.add_event(ScheduleEvent::new("P1", 7, 9));
        s.add_result(JobResult::new("P2", 1, 3, 4, 5));
        s.add_result(JobResult::new("P1", 4, 2, 2, 9));
        s
    }

    #[test]
    fn test_event_burst_time() {
        let e = ScheduleEvent::new("P1", 3, 7);
        assert_eq!(e.burst_time, 4);
    }

    #[test]
    fn test_result_derived_fields() {
        let r = JobResult::new("P1", 4, 2, 3, 9);
        assert_eq!(r.turnaround_time, 7);
        assert_eq!(r.waiting_time, 3);
        assert_eq!(r.response_time(), 1);
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 9);
        assert_eq!(s.busy_time(), 5);
    }

    #[test]
    fn test_execution_order() {
        let s = sample_schedule();
        assert_eq!(s.execution_order(), vec!["P1", "P2"]);
    }

    #[test]
    fn test_events_for_job() {
        let s = sample_schedule();
        assert_eq!(s.events_for_job("P1").len(), 2);
        assert!(s.events_for_job("P9").is_empty());
    }

    #[test]
    fn test_idle_periods() {
        let s = sample_schedule();
        assert_eq!(
            s.idle_periods(),
            vec![
                IdlePeriod { start_time: 0, end_time: 2 },
                IdlePeriod { start_time: 5, end_time: 7 },
            ]
        );
    }

    #[test]
    fn test_completion_bars_sorted() {
        let mut s = Schedule::new();
        s.add_result(JobResult::new("P1", 4, 0, 0, 9));
        s.add_result(JobResult::new("P2", 1, 0, 4, 5));
        let bars = s.completion_bars();
        assert_eq!(bars[0].job_id, "P2");
        assert_eq!(bars[1].job_id, "P1");
        assert_eq!(bars[1].burst, 4);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.makespan(), 0);
        assert!(s.idle_periods().is_empty());
        assert!(s.result_for_job("P1").is_none());
    }
}
