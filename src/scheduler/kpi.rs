//! Schedule quality metrics.
//!
//! Computes the standard per-run CPU scheduling indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest slice end |
//! | Busy time | Sum of slice lengths |
//! | Utilization | busy time / makespan |
//! | Throughput | finished jobs / makespan |
//! | Avg turnaround | Mean of completion - arrival |
//! | Avg waiting | Mean of turnaround - burst |
//! | Avg response | Mean of first dispatch - arrival |
//!
//! Averages over an empty result set are 0.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Number of finished jobs.
    pub job_count: usize,
    /// Latest slice end.
    pub makespan: i64,
    /// Time the CPU spent running jobs.
    pub busy_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..=1.0).
    pub utilization: f64,
    /// Finished jobs per time unit.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let job_count = schedule.results.len();
        let makespan = schedule.makespan();
        let busy_time = schedule.busy_time();

        let mean = |total: f64| {
            if job_count == 0 {
                0.0
            } else {
                total / job_count as f64
            }
        };
        let per_makespan = |value: f64| {
            if makespan <= 0 {
                0.0
            } else {
                value / makespan as f64
            }
        };

        // Summed as f64: per-job times fit in i64, their totals may not.
        let total_turnaround: f64 = schedule.results.iter().map(|r| r.turnaround_time as f64).sum();
        let total_waiting: f64 = schedule.results.iter().map(|r| r.waiting_time as f64).sum();
        let total_response: f64 = schedule.results.iter().map(|r| r.response_time() as f64).sum();

        Self {
            job_count,
            makespan,
            busy_time,
            utilization: per_makespan(busy_time as f64),
            throughput: per_makespan(job_count as f64),
            avg_turnaround: mean(total_turnaround),
            avg_waiting: mean(total_waiting),
            avg_response: mean(total_response),
        }
    }

    /// Average turnaround with two decimals, e.g. `"7.40"`.
    pub fn avg_turnaround_display(&self) -> String {
        format_two_decimals(self.avg_turnaround)
    }

    /// Average waiting time with two decimals, e.g. `"4.60"`.
    pub fn avg_waiting_display(&self) -> String {
        format_two_decimals(self.avg_waiting)
    }
}

/// Formats a metric the way results tables show it.
pub fn format_two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobResult, ScheduleEvent};

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_event(ScheduleEvent::new("P1", 0, 5));
        s.add_event(ScheduleEvent::new("P3", 5, 6));
        s.add_event(ScheduleEvent::new("P2", 6, 9));
        s.add_result(JobResult::new("P1", 5, 0, 0, 5));
        s.add_result(JobResult::new("P3", 1, 1, 5, 6));
        s.add_result(JobResult::new("P2", 3, 2, 6, 9));
        s
    }

    #[test]
    fn test_metrics_basic() {
        let m = ScheduleMetrics::calculate(&sample_schedule());
        assert_eq!(m.job_count, 3);
        assert_eq!(m.makespan, 9);
        assert_eq!(m.busy_time, 9);
        assert!((m.utilization - 1.0).abs() < 1e-10);
        // (5 + 5 + 7) / 3
        assert!((m.avg_turnaround - 17.0 / 3.0).abs() < 1e-10);
        // (0 + 4 + 4) / 3
        assert!((m.avg_waiting - 8.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.avg_turnaround_display(), "5.67");
        assert_eq!(m.avg_waiting_display(), "2.67");
    }

    #[test]
    fn test_utilization_with_idle() {
        let mut s = Schedule::new();
        s.add_event(ScheduleEvent::new("P1", 2, 4));
        s.add_result(JobResult::new("P1", 2, 2, 2, 4));
        let m = ScheduleMetrics::calculate(&s);
        assert!((m.utilization - 0.5).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
        assert!((m.avg_response - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(&Schedule::new());
        assert_eq!(m.job_count, 0);
        assert_eq!(m.makespan, 0);
        assert!((m.utilization - 0.0).abs() < 1e-10);
        assert_eq!(m.avg_turnaround_display(), "0.00");
        assert_eq!(m.avg_waiting_display(), "0.00");
    }

    #[test]
    fn test_format_two_decimals() {
        assert_eq!(format_two_decimals(2.0), "2.00");
        assert_eq!(format_two_decimals(4.126), "4.13");
    }

    #[test]
    fn test_large_totals_do_not_overflow() {
        let mut s = Schedule::new();
        s.add_event(ScheduleEvent::new("P1", 0, i64::MAX / 2));
        s.add_event(ScheduleEvent::new("P2", i64::MAX / 2, i64::MAX - 1));
        s.add_result(JobResult::new("P1", i64::MAX / 2, 0, 0, i64::MAX / 2));
        s.add_result(JobResult::new("P2", i64::MAX / 2, 0, i64::MAX / 2, i64::MAX - 1));
        let m = ScheduleMetrics::calculate(&s);
        assert!(m.avg_turnaround > 0.0);
        assert!(m.avg_waiting > 0.0);
    }
}
