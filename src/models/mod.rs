//! CPU scheduling domain models.
//!
//! Plain data types exchanged between the kernels and whatever renders
//! their output. Everything here is serializable so a presentation layer
//! can receive results as JSON.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | Textbook term | Visualizer |
//! |--------------|---------------|------------|
//! | Job | Process / CPU burst | Job box in the queue row |
//! | ScheduleEvent | Dispatch slice | Gantt bar |
//! | JobResult | Per-process statistics | Results table row |
//! | Process | Banker's process row | Process table row |

mod job;
mod process;
mod schedule;

pub use job::Job;
pub use process::{Process, ResourceVector};
pub use schedule::{CompletionBar, IdlePeriod, JobResult, Schedule, ScheduleEvent};
