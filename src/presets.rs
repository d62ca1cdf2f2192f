//! Ready-made sample inputs.
//!
//! Each function returns a fresh, valid data set for one algorithm. The
//! sets are small enough to trace by hand and exercise the interesting
//! cases: out-of-order arrivals, priority inversion against burst order,
//! and a Banker's state with a non-trivial safe sequence.

use crate::models::{Job, Process};

/// FCFS sample with staggered arrivals (P3 arrives before P2).
pub fn fcfs() -> Vec<Job> {
    vec![
        Job::new("P1", 5),
        Job::new("P2", 3).with_arrival(2),
        Job::new("P3", 1).with_arrival(1),
        Job::new("P4", 2).with_arrival(3),
        Job::new("P5", 3).with_arrival(4),
    ]
}

/// SJF sample. Arrivals are ignored by the kernel.
pub fn sjf() -> Vec<Job> {
    vec![
        Job::new("P1", 5),
        Job::new("P2", 3),
        Job::new("P3", 1),
        Job::new("P4", 2),
        Job::new("P5", 3),
    ]
}

/// Priority sample. Lower number runs first.
pub fn priority() -> Vec<Job> {
    [(5, 3), (3, 1), (1, 4), (2, 2), (3, 5)]
        .into_iter()
        .enumerate()
        .map(|(i, (burst, priority))| Job::new(format!("P{}", i + 1), burst).with_priority(priority))
        .collect()
}

/// Round Robin sample with quantum 2 on every job.
pub fn round_robin() -> Vec<Job> {
    [5, 3, 1, 2, 3]
        .into_iter()
        .enumerate()
        .map(|(i, burst)| {
            Job::new(format!("P{}", i + 1), burst)
                .with_arrival(i as i64)
                .with_quantum(2)
        })
        .collect()
}

/// Longer Round Robin sample for quantum sweeps (quantum 4).
pub fn round_robin_sweep() -> Vec<Job> {
    vec![
        Job::new("P1", 10).with_quantum(4),
        Job::new("P2", 5).with_arrival(1).with_quantum(4),
        Job::new("P3", 8).with_arrival(2).with_quantum(4),
    ]
}

/// Multilevel Queue sample across three tiers.
pub fn multilevel_queue() -> Vec<Job> {
    vec![
        Job::new("P1", 5).with_queue_level(1),
        Job::new("P2", 3).with_arrival(1).with_queue_level(2),
        Job::new("P3", 1).with_arrival(2).with_queue_level(3),
        Job::new("P4", 2).with_arrival(3).with_queue_level(1),
        Job::new("P5", 3).with_arrival(4).with_queue_level(2),
    ]
}

/// Five processes over three resource types.
pub fn banker_processes() -> Vec<Process> {
    vec![
        Process::new("P0", [7, 5, 3], [0, 1, 0]),
        Process::new("P1", [3, 2, 2], [2, 0, 0]),
        Process::new("P2", [9, 0, 2], [3, 0, 2]),
        Process::new("P3", [2, 2, 2], [2, 1, 1]),
        Process::new("P4", [4, 3, 3], [0, 0, 2]),
    ]
}

/// Available vector paired with [`banker_processes`].
pub fn banker_available() -> Vec<i64> {
    vec![3, 3, 2]
}
