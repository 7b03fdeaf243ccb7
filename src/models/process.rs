//! Process model.
//!
//! A process is one unit of CPU demand: it becomes eligible at its
//! arrival time and needs `burst_time` units of service in total.
//!
//! # Time Representation
//! Arrival and burst times are integer ticks relative to t=0. Schedulers
//! never mutate a caller's `Process`; remaining-time counters live in
//! per-run state owned by the scheduler.

use serde::{Deserialize, Serialize};

/// Process identifier.
///
/// Uniqueness is not required. Predictive SJF keys its burst estimates
/// by id, so processes sharing an id share one estimate.
pub type ProcessId = i64;

/// A process to be simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU service required (ticks).
    pub burst_time: i64,
}

impl Process {
    /// Creates a process.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[id {} : arrive_time {},  burst_time {}]",
            self.id, self.arrival_time, self.burst_time
        )
    }
}

/// Whether the list is in non-decreasing arrival order.
///
/// FCFS and SRTF admit processes in list order; their results only match
/// arrival-order intuition when this holds.
pub fn is_sorted_by_arrival(processes: &[Process]) -> bool {
    processes
        .windows(2)
        .all(|w| w[0].arrival_time <= w[1].arrival_time)
}
