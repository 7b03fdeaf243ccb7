//! Simulation domain models.
//!
//! Provides the data types shared by every discipline: the input
//! process record, the CPU switch timeline, and the per-run result.
//!
//! # Lifecycle
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | `Process` (owned by the caller, never mutated) |
//! | Run output | `Schedule` of `ScheduleEvent`s |
//! | Metrics | `SimulationResult` with `ProcessOutcome`s |

mod process;
mod result;
mod schedule;

pub use process::{is_sorted_by_arrival, Process, ProcessId};
pub use result::{DisciplineKind, ProcessOutcome, SimulationResult};
pub use schedule::{format_time, Schedule, ScheduleEvent};
