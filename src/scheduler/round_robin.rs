//! Round-Robin.
//!
//! # Algorithm
//!
//! Loop until every process is finished:
//! 1. Append every not-yet-enqueued process with `arrival <= clock` to
//!    the tail of the ready queue, in list order.
//! 2. If no enqueued process is unfinished, advance the clock by 1 (idle).
//! 3. After the first dispatch, rotate the queue by one so the process at
//!    the head moves to the tail. Newly arrived processes are appended
//!    before the rotation and therefore run before the preempted one.
//! 4. If the head is unfinished, run it for `min(quantum, remaining)`.
//!    Finished processes stay in the queue and are skipped on rotation.
//!
//! A switch event is recorded only when the dispatched id differs from the
//! previous event, so a process that keeps the CPU across a quantum
//! boundary produces one event.
//!
//! The quantum may be fractional, so remaining time is tracked as `f64`.
//!
//! # Complexity
//! O((total_burst / quantum) * n).

use std::collections::VecDeque;

use super::Discipline;
use crate::error::{SimError, SimResult};
use crate::models::{DisciplineKind, Process, ProcessOutcome, Schedule, SimulationResult};

/// Round-Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRobin {
    quantum: f64,
}

impl RoundRobin {
    /// Creates a Round-Robin discipline.
    ///
    /// # Errors
    /// `SimError::InvalidParameter` unless `quantum` is finite and positive.
    pub fn new(quantum: f64) -> SimResult<Self> {
        if !quantum.is_finite() || quantum <= 0.0 {
            return Err(SimError::parameter(
                "time_quantum",
                format!("{quantum} is not a finite positive number"),
            ));
        }
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> f64 {
        self.quantum
    }
}

#[derive(Debug, Clone)]
struct RunState {
    remaining: f64,
    last_touched: f64,
    waiting: f64,
    completion: f64,
}

impl Discipline for RoundRobin {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::RoundRobin
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let n = processes.len();
        let q = self.quantum;

        let mut states: Vec<RunState> = processes
            .iter()
            .map(|p| RunState {
                remaining: p.burst_time as f64,
                last_touched: p.arrival_time as f64,
                waiting: 0.0,
                completion: 0.0,
            })
            .collect();
        let mut enqueued = vec![false; n];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);

        let mut schedule = Schedule::new();
        let mut clock = 0.0_f64;
        let mut total_waiting = 0.0_f64;
        let mut ready = 0usize;
        let mut done = 0usize;
        let mut dispatched = false;

        while done < n {
            for (i, p) in processes.iter().enumerate() {
                if !enqueued[i] && p.arrival_time as f64 <= clock {
                    enqueued[i] = true;
                    queue.push_back(i);
                    ready += 1;
                }
            }

            if ready == 0 {
                clock += 1.0;
                continue;
            }

            if dispatched {
                queue.rotate_left(1);
            }

            let Some(&head) = queue.front() else {
                continue;
            };
            let state = &mut states[head];
            if state.remaining <= 0.0 {
                continue;
            }

            let waited = clock - state.last_touched;
            state.waiting += waited;
            total_waiting += waited;

            let id = processes[head].id;
            if schedule.switch_to(clock, id) {
                tracing::trace!(time = clock, id, "switch");
            }

            if state.remaining > q {
                clock += q;
                state.remaining -= q;
            } else {
                clock += state.remaining;
                state.remaining = 0.0;
                state.completion = clock;
                done += 1;
                ready -= 1;
            }
            state.last_touched = clock;
            dispatched = true;
        }

        let outcomes = processes
            .iter()
            .zip(&states)
            .map(|(p, s)| ProcessOutcome {
                id: p.id,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                completion_time: s.completion,
                waiting_time: s.waiting,
            })
            .collect();

        SimulationResult {
            discipline: DisciplineKind::RoundRobin,
            schedule,
            outcomes,
            total_waiting_time: total_waiting,
            makespan: clock,
        }
    }
}
