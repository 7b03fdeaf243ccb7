//! Shortest-Job-First with exponential burst prediction.
//!
//! # Algorithm
//!
//! Every id starts with the same predicted burst. Repeat once per process:
//! 1. Candidates are unfinished processes with `arrival <= clock`.
//! 2. If there are none, jump the clock to the arrival time of the process
//!    at the current iteration's list position (not the earliest pending
//!    arrival) and recompute candidates.
//! 3. Dispatch the candidate with the lowest prediction (lowest list index
//!    on ties) and run it to completion.
//! 4. Update the prediction for its id:
//!    `tau_next = alpha * burst + (1 - alpha) * tau`.
//!
//! The scheduler is non-causal: the true burst is known when the process
//! is dispatched, but only the prediction is used for selection.
//!
//! Predictions are keyed by process id, so processes sharing an id share
//! one estimate.
//!
//! # Complexity
//! O(n^2).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use std::collections::HashMap;

use super::Discipline;
use crate::error::{SimError, SimResult};
use crate::models::{
    DisciplineKind, Process, ProcessId, ProcessOutcome, Schedule, SimulationResult,
};

/// Prediction assigned to every id before its first completion.
pub const DEFAULT_INITIAL_PREDICTION: f64 = 5.0;

/// Shortest-Job-First on exponentially smoothed burst predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sjf {
    alpha: f64,
    initial_prediction: f64,
}

impl Sjf {
    /// Creates an SJF discipline with smoothing factor `alpha`.
    ///
    /// # Errors
    /// `SimError::InvalidParameter` unless `alpha` is in `[0, 1]`.
    pub fn new(alpha: f64) -> SimResult<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SimError::parameter(
                "alpha",
                format!("{alpha} is outside [0, 1]"),
            ));
        }
        Ok(Self {
            alpha,
            initial_prediction: DEFAULT_INITIAL_PREDICTION,
        })
    }

    /// Sets the prediction every id starts with.
    ///
    /// # Errors
    /// `SimError::InvalidParameter` unless `prediction` is finite and non-negative.
    pub fn with_initial_prediction(mut self, prediction: f64) -> SimResult<Self> {
        if !prediction.is_finite() || prediction < 0.0 {
            return Err(SimError::parameter(
                "initial_prediction",
                format!("{prediction} is not a finite non-negative number"),
            ));
        }
        self.initial_prediction = prediction;
        Ok(self)
    }

    /// The smoothing factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The starting prediction.
    pub fn initial_prediction(&self) -> f64 {
        self.initial_prediction
    }

    /// Exponential smoothing step.
    #[inline]
    pub fn predict(&self, previous: f64, actual_burst: i64) -> f64 {
        self.alpha * actual_burst as f64 + (1.0 - self.alpha) * previous
    }

    /// Simulates and also returns the final prediction table.
    pub fn simulate_with_predictions(
        &self,
        processes: &[Process],
    ) -> (SimulationResult, HashMap<ProcessId, f64>) {
        let n = processes.len();
        let mut predictions: HashMap<ProcessId, f64> = processes
            .iter()
            .map(|p| (p.id, self.initial_prediction))
            .collect();
        let mut finished = vec![false; n];
        let mut outcomes: Vec<Option<ProcessOutcome>> = vec![None; n];

        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;
        let mut total_waiting: i128 = 0;

        for cnt in 0..n {
            let mut candidates = arrived(processes, &finished, clock);
            if candidates.is_empty() {
                clock = processes[cnt].arrival_time;
                candidates = arrived(processes, &finished, clock);
            }
            if candidates.is_empty() {
                // The process at `cnt` was already dispatched, so its arrival
                // time does not lead anywhere new.
                let earliest = processes
                    .iter()
                    .zip(&finished)
                    .filter(|(_, &f)| !f)
                    .map(|(p, _)| p.arrival_time)
                    .min()
                    .unwrap_or(clock);
                tracing::warn!(
                    position = cnt,
                    jump_to = earliest,
                    "SJF idle jump found no candidate; using earliest pending arrival"
                );
                clock = earliest;
                candidates = arrived(processes, &finished, clock);
            }

            let mut best: Option<(usize, f64)> = None;
            for &i in &candidates {
                let pred = predictions
                    .get(&processes[i].id)
                    .copied()
                    .unwrap_or(self.initial_prediction);
                if best.map_or(true, |(_, b)| pred < b) {
                    best = Some((i, pred));
                }
            }
            let Some((idx, previous)) = best else {
                break;
            };

            let p = &processes[idx];
            clock = clock.max(p.arrival_time);
            schedule.push(clock as f64, p.id);
            tracing::trace!(time = clock, id = p.id, prediction = previous, "dispatch");

            let waiting = clock - p.arrival_time;
            total_waiting += i128::from(waiting);
            clock += p.burst_time;

            predictions.insert(p.id, self.predict(previous, p.burst_time));
            finished[idx] = true;
            outcomes[idx] = Some(ProcessOutcome {
                id: p.id,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                completion_time: clock as f64,
                waiting_time: waiting as f64,
            });
        }

        let result = SimulationResult {
            discipline: DisciplineKind::Sjf,
            schedule,
            outcomes: outcomes.into_iter().flatten().collect(),
            total_waiting_time: total_waiting as f64,
            makespan: clock as f64,
        };
        (result, predictions)
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            initial_prediction: DEFAULT_INITIAL_PREDICTION,
        }
    }
}

impl Discipline for Sjf {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Sjf
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        self.simulate_with_predictions(processes).0
    }
}

/// Indices of unfinished processes that have arrived by `clock`, in list order.
fn arrived(processes: &[Process], finished: &[bool], clock: i64) -> Vec<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|&(i, p)| !finished[i] && p.arrival_time <= clock)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_equal_seed_tie_breaks_by_index() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 10)];
        let result = Sjf::new(1.0).unwrap().run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(0.0, 1), (4.0, 2)]);
        assert_eq!(result.total_waiting_time, 4.0);
    }

    #[test]
    fn test_sjf_prefers_lower_prediction() {
        // Id 7 ran before with burst 1 (alpha = 1 -> prediction 1); id 8 is
        // still at the seed of 5, so the second id-7 job wins despite its
        // larger real burst.
        let processes = vec![
            Process::new(7, 0, 1),
            Process::new(8, 0, 2),
            Process::new(7, 0, 9),
        ];
        let result = Sjf::new(1.0).unwrap().run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(0.0, 7), (1.0, 7), (10.0, 8)]);
    }

    #[test]
    fn test_sjf_prediction_update() {
        let processes = vec![Process::new(1, 0, 9)];
        let sjf = Sjf::new(0.5).unwrap();
        let (_, predictions) = sjf.simulate_with_predictions(&processes);
        // 0.5 * 9 + 0.5 * 5
        assert!((predictions[&1] - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_alpha_zero_keeps_seed() {
        let sjf = Sjf::new(0.0).unwrap();
        assert_eq!(sjf.predict(5.0, 100), 5.0);
    }

    #[test]
    fn test_sjf_idle_jump_uses_list_position() {
        let processes = vec![Process::new(1, 3, 2), Process::new(2, 10, 1)];
        let result = Sjf::default().run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(3.0, 1), (10.0, 2)]);
        assert_eq!(result.total_waiting_time, 0.0);
    }

    #[test]
    fn test_sjf_idle_jump_overshoots_on_unsorted_input() {
        // At cnt=0 nothing has arrived; the clock jumps to processes[0]'s
        // arrival (8) even though process 2 arrived at 2.
        let processes = vec![Process::new(1, 8, 1), Process::new(2, 2, 1)];
        let result = Sjf::default().run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(8.0, 1), (9.0, 2)]);
        // P1 waits 0, P2 waits 9-2=7
        assert_eq!(result.total_waiting_time, 7.0);
    }

    #[test]
    fn test_sjf_idle_jump_fallback_when_position_already_done() {
        // cnt=1: P2 (position 1) already ran, so jumping to its arrival (0)
        // finds nothing; the clock moves to the earliest pending arrival (5).
        let processes = vec![
            Process::new(1, 5, 1),
            Process::new(2, 0, 1),
            Process::new(3, 50, 1),
        ];
        let result = Sjf::default().run(&processes).unwrap();
        assert_eq!(result.event_pairs(), vec![(0.0, 2), (5.0, 1), (50.0, 3)]);
        assert_eq!(result.total_waiting_time, 0.0);
    }

    #[test]
    fn test_sjf_invalid_parameters() {
        assert!(Sjf::new(-0.1).is_err());
        assert!(Sjf::new(1.5).is_err());
        assert!(Sjf::new(f64::NAN).is_err());
        assert!(Sjf::default().with_initial_prediction(-1.0).is_err());
        assert!(Sjf::default().with_initial_prediction(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sjf_outcomes_in_input_order() {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 0, 10)];
        let result = Sjf::new(1.0).unwrap().run(&processes).unwrap();
        let ids: Vec<ProcessId> = result.outcomes.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
