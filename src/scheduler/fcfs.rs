//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! For each process in list order, the CPU picks it up at
//! `max(clock, arrival)` and runs it to completion. The list is NOT
//! sorted by arrival: "first come" means first in the list, so a late
//! arrival placed early in the list holds back everything after it.
//!
//! # Complexity
//! O(n).

use super::Discipline;
use crate::models::{
    is_sorted_by_arrival, DisciplineKind, Process, ProcessOutcome, Schedule, SimulationResult,
};

/// First-Come-First-Served (list order, non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Fcfs
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        if !is_sorted_by_arrival(processes) {
            tracing::warn!("FCFS input is not sorted by arrival time; list order is used");
        }

        let mut schedule = Schedule::new();
        let mut outcomes = Vec::with_capacity(processes.len());
        let mut clock: i64 = 0;
        let mut total_waiting: i128 = 0;

        for p in processes {
            clock = clock.max(p.arrival_time);
            schedule.push(clock as f64, p.id);
            tracing::trace!(time = clock, id = p.id, "dispatch");

            let waiting = clock - p.arrival_time;
            total_waiting += i128::from(waiting);
            clock += p.burst_time;

            outcomes.push(ProcessOutcome {
                id: p.id,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                completion_time: clock as f64,
                waiting_time: waiting as f64,
            });
        }

        SimulationResult {
            discipline: DisciplineKind::Fcfs,
            schedule,
            outcomes,
            total_waiting_time: total_waiting as f64,
            makespan: clock as f64,
        }
    }
}
