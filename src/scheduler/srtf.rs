//! Shortest-Remaining-Time-First.
//!
//! # Algorithm
//!
//! At every integer tick:
//! 1. Admit the next process in list order if it has arrived. At most one
//!    process is admitted per tick, so the list must be sorted by arrival
//!    for admissions to be timely. Waiting time still counts from the
//!    true arrival.
//! 2. If nothing is ready, advance the clock by 1.
//! 3. Run the ready process with the least remaining burst for one tick.
//!    Ties go to the lowest list index.
//! 4. Record an event when the selected process (by list position)
//!    differs from the one selected on the previous tick.
//!
//! The ready set is a min-heap keyed by `(remaining, index)`, which
//! reproduces the lowest-index tie-break exactly.
//!
//! # Complexity
//! O(total_burst * log n).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::Discipline;
use crate::models::{
    is_sorted_by_arrival, DisciplineKind, Process, ProcessOutcome, Schedule, SimulationResult,
};

/// Shortest-Remaining-Time-First (preemptive, re-evaluated every tick).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

#[derive(Debug, Clone, Copy)]
struct RunState {
    remaining: i64,
    last_touched: i64,
    waiting: i64,
    completion: i64,
}

impl Discipline for Srtf {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Srtf
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        if !is_sorted_by_arrival(processes) {
            tracing::warn!("SRTF input is not sorted by arrival time; admissions follow list order");
        }

        let n = processes.len();
        let mut states: Vec<RunState> = processes
            .iter()
            .map(|p| RunState {
                remaining: p.burst_time,
                last_touched: p.arrival_time,
                waiting: 0,
                completion: 0,
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::with_capacity(n);
        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;
        let mut total_waiting: i128 = 0;
        let mut next_admit = 0usize;
        let mut done = 0usize;
        let mut previous: Option<usize> = None;

        while done < n {
            if next_admit < n && processes[next_admit].arrival_time <= clock {
                ready.push(Reverse((states[next_admit].remaining, next_admit)));
                next_admit += 1;
            }

            let Some(Reverse((_, idx))) = ready.pop() else {
                clock += 1;
                continue;
            };

            if previous != Some(idx) {
                schedule.push(clock as f64, processes[idx].id);
                tracing::trace!(time = clock, id = processes[idx].id, "switch");
            }
            previous = Some(idx);

            let state = &mut states[idx];
            let waited = clock - state.last_touched;
            state.waiting += waited;
            total_waiting += i128::from(waited);

            state.remaining -= 1;
            clock += 1;
            state.last_touched = clock;

            if state.remaining == 0 {
                state.completion = clock;
                done += 1;
            } else {
                ready.push(Reverse((state.remaining, idx)));
            }
        }

        let outcomes = processes
            .iter()
            .zip(&states)
            .map(|(p, s)| ProcessOutcome {
                id: p.id,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                completion_time: s.completion as f64,
                waiting_time: s.waiting as f64,
            })
            .collect();

        SimulationResult {
            discipline: DisciplineKind::Srtf,
            schedule,
            outcomes,
            total_waiting_time: total_waiting as f64,
            makespan: clock as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srtf_preempts_for_shorter() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let result = Srtf.run(&processes).unwrap();
        assert_eq!(
            result.event_pairs(),
            vec![(0.0, 1), (1.0, 2), (2.0, 3), (3.0, 2), (5.0, 1)]
        );
        // P1: 9-0-5=4, P2: 5-1-3=1, P3: 3-2-1=0
        assert_eq!(result.total_waiting_time, 5.0);
        assert!((result.average_waiting_time() - 5.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_single_process() {
        let processes = vec![Process::new(42, 7, 3)];
        let result = Srtf.run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(7.0, 42)]);
        assert_eq!(result.average_waiting_time(), 0.0);
        assert_eq!(result.makespan, 10.0);
    }

    #[test]
    fn test_srtf_simultaneous_arrival_admitted_next_tick() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 3)];
        let result = Srtf.run(&processes).unwrap();
        // P2 is admitted one tick late; P1 has less remaining by then.
        assert_eq!(result.event_pairs(), vec![(0.0, 1), (3.0, 2)]);
        assert_eq!(result.outcomes[1].waiting_time, 3.0);
    }

    #[test]
    fn test_srtf_equal_remaining_prefers_earlier_index() {
        // At t=2, P1 has 2 left and P2 arrives with 2: P1 keeps the CPU.
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 2, 2)];
        let result = Srtf.run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(0.0, 1), (4.0, 2)]);
    }

    #[test]
    fn test_srtf_one_admission_per_tick() {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 1),
            Process::new(3, 0, 1),
        ];
        let result = Srtf.run(&processes).unwrap();
        // t0: only P1 admitted; t1: P2 admitted and runs; t2: P3 admitted and runs.
        assert_eq!(
            result.event_pairs(),
            vec![(0.0, 1), (1.0, 2), (2.0, 3), (3.0, 1)]
        );
        // P1: 7-0-5=2, P2: 2-0-1=1, P3: 3-0-1=2
        assert_eq!(result.total_waiting_time, 5.0);
    }

    #[test]
    fn test_srtf_idle_gap() {
        let processes = vec![Process::new(1, 0, 1), Process::new(2, 5, 2)];
        let result = Srtf.run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(0.0, 1), (5.0, 2)]);
        assert_eq!(result.total_waiting_time, 0.0);
    }
}
