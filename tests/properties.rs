//! Property tests over every scheduling kernel and the safety check.

use cpu_schedule::banker::{check_safety, verify_safe_sequence, SafetyOutcome};
use cpu_schedule::models::{Job, Process, Schedule};
use cpu_schedule::scheduler::{Algorithm, Scheduler};
use proptest::prelude::*;

fn arb_jobs() -> impl Strategy<Value = Vec<Job>> {
    prop::collection::vec((0i64..20, 1i64..10, 1i32..5, 1i64..5, 1i32..4), 0..8).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority, quantum, level))| {
                Job::new(format!("J{i}"), burst)
                    .with_arrival(arrival)
                    .with_priority(priority)
                    .with_quantum(quantum)
                    .with_queue_level(level)
            })
            .collect()
    })
}

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Fcfs),
        Just(Algorithm::Sjf),
        Just(Algorithm::Priority),
        Just(Algorithm::RoundRobin { quantum: None }),
        (1i64..6).prop_map(|q| Algorithm::RoundRobin { quantum: Some(q) }),
        Just(Algorithm::MultilevelQueue),
    ]
}

fn arb_banker_state() -> impl Strategy<Value = (Vec<Process>, Vec<i64>)> {
    (1usize..4).prop_flat_map(|dims| {
        let process = (
            prop::collection::vec(0i64..6, dims),
            prop::collection::vec(0i64..6, dims),
        )
            .prop_map(|(a, b)| {
                let maximum: Vec<i64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
                (maximum, a)
            });
        (
            prop::collection::vec(process, 0..6),
            prop::collection::vec(0i64..6, dims),
        )
            .prop_map(|(rows, available)| {
                let processes = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (maximum, allocation))| Process::new(format!("P{i}"), maximum, allocation))
                    .collect();
                (processes, available)
            })
    })
}

fn total_slice_time(schedule: &Schedule, job_id: &str) -> i64 {
    schedule.events_for_job(job_id).iter().map(|e| e.burst_time).sum()
}

proptest! {
    #[test]
    fn every_job_gets_exactly_its_burst(jobs in arb_jobs(), algorithm in arb_algorithm()) {
        let schedule = algorithm.run(&jobs).unwrap();
        prop_assert_eq!(schedule.results.len(), jobs.len());
        for job in &jobs {
            prop_assert_eq!(total_slice_time(&schedule, &job.id), job.burst);
        }
    }

    #[test]
    fn slices_never_overlap(jobs in arb_jobs(), algorithm in arb_algorithm()) {
        let schedule = algorithm.schedule(&jobs);
        for pair in schedule.events.windows(2) {
            prop_assert!(pair[0].end_time <= pair[1].start_time);
        }
        for event in &schedule.events {
            prop_assert!(event.start_time < event.end_time);
        }
    }

    #[test]
    fn timings_are_consistent(jobs in arb_jobs(), algorithm in arb_algorithm()) {
        let schedule = algorithm.schedule(&jobs);
        for result in &schedule.results {
            prop_assert!(result.waiting_time >= 0);
            prop_assert!(result.turnaround_time >= result.burst);
            prop_assert_eq!(result.turnaround_time, result.completion - result.arrival);
            prop_assert_eq!(result.waiting_time, result.turnaround_time - result.burst);
            prop_assert!(result.first_response_time >= result.arrival);
        }
    }

    #[test]
    fn kernels_are_deterministic(jobs in arb_jobs(), algorithm in arb_algorithm()) {
        prop_assert_eq!(algorithm.schedule(&jobs), algorithm.schedule(&jobs));
    }

    #[test]
    fn safe_sequences_replay((processes, available) in arb_banker_state()) {
        match check_safety(&processes, &available).unwrap() {
            SafetyOutcome::Safe(sequence) => {
                prop_assert_eq!(sequence.len(), processes.len());
                prop_assert!(verify_safe_sequence(&processes, &available, &sequence.order()));
            }
            SafetyOutcome::Unsafe { blocked, .. } => {
                prop_assert!(!blocked.is_empty());
            }
        }
    }
}
