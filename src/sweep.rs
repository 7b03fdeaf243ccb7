//! Parameter sweeps for Round-Robin quanta and SJF smoothing factors.
//!
//! A sweep re-runs one discipline over a grid of parameter values and
//! reports the value with the lowest average waiting time. Ties go to
//! the first minimum in grid order.
//!
//! Grid points are independent: each run reads the shared `&[Process]`
//! and owns its run state. With `parallel` set, contiguous chunks of the
//! grid are evaluated on scoped worker threads and the results are
//! reassembled in grid order, so the outcome is identical to a
//! sequential sweep.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::models::Process;
use crate::scheduler::{Discipline, RoundRobin, Sjf};
use crate::validation::ensure_valid;

/// Evenly spaced parameter values `x * step` for `x` in `from..=to`.
///
/// Values are computed as `x as f64 * step` rather than by repeated
/// addition, so `Grid::new(0.1, 1, 100)` yields exactly the products
/// `0.1, 0.2, 0.30000000000000004, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub step: f64,
    pub from: u32,
    pub to: u32,
}

impl Grid {
    /// Creates a grid.
    pub fn new(step: f64, from: u32, to: u32) -> Self {
        Self { step, from, to }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        if self.from > self.to {
            0
        } else {
            (self.to - self.from) as usize + 1
        }
    }

    /// Whether the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid values in order.
    pub fn values(&self) -> Vec<f64> {
        (self.from..=self.to).map(|x| x as f64 * self.step).collect()
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub average_waiting_time: f64,
}

/// Outcome of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Parameter that was swept (`"time_quantum"` or `"alpha"`).
    pub parameter: String,
    /// Grid value with the lowest average waiting time.
    pub best_value: f64,
    /// Lowest average waiting time.
    pub best_average_waiting_time: f64,
    /// Every grid point in grid order.
    pub points: Vec<SweepPoint>,
}

/// Finds the Round-Robin quantum minimizing average waiting time.
///
/// # Errors
/// Input validation errors, an empty grid, or a non-positive grid value.
pub fn sweep_quantum(
    processes: &[Process],
    grid: &Grid,
    parallel: bool,
) -> SimResult<SweepResult> {
    ensure_valid(processes)?;
    let values = grid.values();
    let averages = evaluate(&values, parallel, |q| {
        Ok(RoundRobin::new(q)?.simulate(processes).average_waiting_time())
    })?;
    best_of("time_quantum", &values, averages)
}

/// Finds the SJF smoothing factor minimizing average waiting time.
///
/// # Errors
/// Input validation errors, an empty grid, or a grid value outside `[0, 1]`.
pub fn sweep_alpha(
    processes: &[Process],
    grid: &Grid,
    initial_prediction: f64,
    parallel: bool,
) -> SimResult<SweepResult> {
    ensure_valid(processes)?;
    let values = grid.values();
    let averages = evaluate(&values, parallel, |alpha| {
        let sjf = Sjf::new(alpha)?.with_initial_prediction(initial_prediction)?;
        Ok(sjf.simulate(processes).average_waiting_time())
    })?;
    best_of("alpha", &values, averages)
}

fn evaluate<F>(values: &[f64], parallel: bool, eval: F) -> SimResult<Vec<f64>>
where
    F: Fn(f64) -> SimResult<f64> + Sync,
{
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    if !parallel || workers < 2 || values.len() < 2 {
        return values.iter().map(|&v| eval(v)).collect();
    }

    let chunk_size = values.len().div_ceil(workers);
    tracing::debug!(points = values.len(), workers, chunk_size, "parallel sweep");

    let chunks: Vec<Vec<SimResult<f64>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = values
            .chunks(chunk_size)
            .map(|chunk| {
                let eval = &eval;
                scope.spawn(move || chunk.iter().map(|&v| eval(v)).collect::<Vec<_>>())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    chunks.into_iter().flatten().collect()
}

fn best_of(parameter: &str, values: &[f64], averages: Vec<f64>) -> SimResult<SweepResult> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &avg) in averages.iter().enumerate() {
        if best.map_or(true, |(_, b)| avg < b) {
            best = Some((i, avg));
        }
    }

    let (idx, best_avg) = best.ok_or_else(|| SimError::InvalidParameter {
        name: if parameter == "alpha" { "alpha_grid" } else { "quantum_grid" },
        reason: "grid has no points".into(),
    })?;

    tracing::debug!(parameter, best_value = values[idx], best_avg, "sweep finished");

    Ok(SweepResult {
        parameter: parameter.to_string(),
        best_value: values[idx],
        best_average_waiting_time: best_avg,
        points: values
            .iter()
            .zip(averages)
            .map(|(&value, average_waiting_time)| SweepPoint {
                value,
                average_waiting_time,
            })
            .collect(),
    })
}
