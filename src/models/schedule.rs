//! Schedule (CPU switch timeline) model.
//!
//! A schedule is the ordered list of moments at which the CPU switched
//! to a process. It is not a full Gantt chart: a process that keeps the
//! CPU across a quantum boundary or a tick does not produce a new event.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A CPU switch: at `time`, the CPU starts running `process_id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// Switch time. Integral for every discipline except Round-Robin
    /// with a fractional quantum.
    pub time: f64,
    /// Process that takes the CPU.
    pub process_id: ProcessId,
}

impl ScheduleEvent {
    /// Creates an event.
    pub fn new(time: f64, process_id: ProcessId) -> Self {
        Self { time, process_id }
    }
}

impl std::fmt::Display for ScheduleEvent {
    /// Formats as `(time, id)`, printing integral times without a fraction.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", format_time(self.time), self.process_id)
    }
}

/// Formats a simulated time, dropping the fraction when it is zero.
pub fn format_time(time: f64) -> String {
    if time.fract() == 0.0 && time.abs() < 1e15 {
        format!("{}", time as i64)
    } else {
        format!("{time}")
    }
}

/// Ordered CPU switch events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Events in emission order (non-decreasing time).
    pub events: Vec<ScheduleEvent>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event unconditionally.
    ///
    /// Used by non-preemptive disciplines, where every dispatch is a switch.
    pub fn push(&mut self, time: f64, process_id: ProcessId) {
        self.events.push(ScheduleEvent::new(time, process_id));
    }

    /// Appends an event only if `process_id` differs from the last event.
    ///
    /// Returns whether an event was recorded.
    pub fn switch_to(&mut self, time: f64, process_id: ProcessId) -> bool {
        if self.last_process() == Some(process_id) {
            return false;
        }
        self.push(time, process_id);
        true
    }

    /// Process of the most recent event.
    pub fn last_process(&self) -> Option<ProcessId> {
        self.events.last().map(|e| e.process_id)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over events in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEvent> {
        self.events.iter()
    }

    /// Events as `(time, id)` pairs.
    pub fn pairs(&self) -> Vec<(f64, ProcessId)> {
        self.events.iter().map(|e| (e.time, e.process_id)).collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEvent;
    type IntoIter = std::slice::Iter<'a, ScheduleEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
