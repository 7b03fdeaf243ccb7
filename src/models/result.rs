//! Simulation result model.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting time | completion - arrival - burst, per process |
//! | Average waiting time | total waiting / process count |
//! | Turnaround time | completion - arrival, per process |
//! | Makespan | Clock value when the last process completes |
//! | Switch count | Number of schedule events |

use serde::{Deserialize, Serialize};

use super::{ProcessId, Schedule};

/// Scheduling discipline that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisciplineKind {
    /// First-Come-First-Served (list order, non-preemptive).
    Fcfs,
    /// Round-Robin with a fixed time quantum.
    RoundRobin,
    /// Shortest-Remaining-Time-First (preemptive, per tick).
    Srtf,
    /// Shortest-Job-First on exponentially smoothed burst predictions.
    Sjf,
}

impl DisciplineKind {
    /// All disciplines in reporting order.
    pub const ALL: [DisciplineKind; 4] = [Self::Fcfs, Self::RoundRobin, Self::Srtf, Self::Sjf];

    /// Short label ("FCFS", "RR", "SRTF", "SJF").
    pub fn label(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::RoundRobin => "RR",
            Self::Srtf => "SRTF",
            Self::Sjf => "SJF",
        }
    }
}

impl std::fmt::Display for DisciplineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-process outcome of a run, in input list order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub id: ProcessId,
    pub arrival_time: i64,
    pub burst_time: i64,
    /// Clock value when the process finished.
    pub completion_time: f64,
    /// Time spent ready but not running.
    pub waiting_time: f64,
}

impl ProcessOutcome {
    /// Completion minus arrival.
    #[inline]
    pub fn turnaround_time(&self) -> f64 {
        self.completion_time - self.arrival_time as f64
    }
}

/// Output of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Discipline that produced this result.
    pub discipline: DisciplineKind,
    /// CPU switch events.
    pub schedule: Schedule,
    /// Per-process outcomes, indexed by input position.
    pub outcomes: Vec<ProcessOutcome>,
    /// Sum of waiting time over all processes.
    pub total_waiting_time: f64,
    /// Clock value when the run ended.
    pub makespan: f64,
}

impl SimulationResult {
    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.outcomes.len()
    }

    /// `total_waiting_time / process_count`.
    ///
    /// Results are only built from non-empty inputs, so the division is
    /// always defined.
    pub fn average_waiting_time(&self) -> f64 {
        self.total_waiting_time / self.outcomes.len() as f64
    }

    /// Mean of completion minus arrival.
    pub fn average_turnaround_time(&self) -> f64 {
        let sum: f64 = self.outcomes.iter().map(|o| o.turnaround_time()).sum();
        sum / self.outcomes.len() as f64
    }

    /// Number of CPU switches recorded.
    pub fn switch_count(&self) -> usize {
        self.schedule.len()
    }

    /// `(time, id)` pairs of the schedule.
    pub fn event_pairs(&self) -> Vec<(f64, ProcessId)> {
        self.schedule.pairs()
    }
}
