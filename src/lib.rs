//! CPU scheduling and deadlock-avoidance simulation.
//!
//! Simulates classic uniprocessor scheduling policies over synthetic jobs
//! and checks resource-allocation states for safety with the Banker's
//! Algorithm. Every kernel is a pure function of its input; nothing
//! touches real processes or wall-clock time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Process`, `Schedule`,
//!   `ScheduleEvent`, `JobResult`
//! - **`dispatching`**: Ordering rules (`Fifo`, `Spt`, `Priority`) and the
//!   stable multi-key `RuleEngine`
//! - **`scheduler`**: FCFS, SJF, Priority, Round Robin, Multilevel Queue,
//!   schedule metrics, and the quantum sweep
//! - **`banker`**: Safety check with per-step snapshots
//! - **`validation`**: Input integrity checks (IDs, bursts, required
//!   fields, resource vector shape)
//! - **`simulation`**: JSON request/response wrapper over every kernel
//! - **`presets`**: Small sample data sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Job;
//! use cpu_schedule::scheduler::{Scheduler, SequentialScheduler};
//!
//! let jobs = vec![
//!     Job::new("P1", 5),
//!     Job::new("P2", 3).with_arrival(2),
//!     Job::new("P3", 1).with_arrival(1),
//! ];
//! let schedule = SequentialScheduler::fcfs().run(&jobs).unwrap();
//!
//! assert_eq!(schedule.execution_order(), vec!["P1", "P3", "P2"]);
//! assert_eq!(schedule.result_for_job("P2").unwrap().waiting_time, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5 and 8
//! - Dijkstra (1965), "Cooperating Sequential Processes"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod banker;
pub mod dispatching;
pub mod models;
pub mod presets;
pub mod scheduler;
pub mod simulation;
pub mod validation;
