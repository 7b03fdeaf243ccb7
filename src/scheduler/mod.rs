//! CPU scheduling disciplines.
//!
//! Each discipline simulates a single CPU over a fixed, fully known
//! process list and returns the CPU switch timeline together with
//! waiting-time metrics.
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | `Fcfs` | No | List order |
//! | `RoundRobin` | Yes (quantum) | FIFO ready queue, rotated each dispatch |
//! | `Srtf` | Yes (every tick) | Least remaining burst, lowest index on ties |
//! | `Sjf` | No | Least predicted burst, lowest index on ties |
//!
//! # Isolation
//! Disciplines take `&[Process]` and keep remaining-time counters in
//! private run state. Repeated calls with the same input are independent
//! and produce identical results.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::{Sjf, DEFAULT_INITIAL_PREDICTION};
pub use srtf::Srtf;

use std::fmt::Debug;

use crate::config::SimulationConfig;
use crate::error::SimResult;
use crate::models::{DisciplineKind, Process, SimulationResult};
use crate::validation::ensure_valid;

/// A CPU scheduling discipline.
///
/// Implementors provide `simulate`, which may assume a validated,
/// non-empty process list. Callers use `run`, which validates first.
pub trait Discipline: Send + Sync + Debug {
    /// Which discipline this is.
    fn kind(&self) -> DisciplineKind;

    /// Simulates a validated process list.
    fn simulate(&self, processes: &[Process]) -> SimulationResult;

    /// Validates the input, then simulates it.
    ///
    /// # Errors
    /// `SimError::EmptyInput` for an empty list and
    /// `SimError::InvalidProcess` for a negative arrival or non-positive burst.
    fn run(&self, processes: &[Process]) -> SimResult<SimulationResult> {
        ensure_valid(processes)?;
        let result = self.simulate(processes);
        tracing::debug!(
            discipline = %self.kind(),
            processes = processes.len(),
            switches = result.switch_count(),
            average_waiting_time = result.average_waiting_time(),
            "simulation finished"
        );
        Ok(result)
    }
}

/// Builds all four disciplines from `config`, in FCFS, RR, SRTF, SJF order.
///
/// # Errors
/// `SimError::InvalidParameter` for a bad quantum, alpha or initial prediction.
pub fn disciplines(config: &SimulationConfig) -> SimResult<Vec<Box<dyn Discipline>>> {
    let rr = RoundRobin::new(config.time_quantum)?;
    let sjf = Sjf::new(config.alpha)?.with_initial_prediction(config.initial_prediction)?;
    Ok(vec![Box::new(Fcfs), Box::new(rr), Box::new(Srtf), Box::new(sjf)])
}

/// Runs all four disciplines with the parameters in `config`.
///
/// Results are returned in FCFS, RR, SRTF, SJF order.
pub fn run_all(
    processes: &[Process],
    config: &SimulationConfig,
) -> SimResult<Vec<SimulationResult>> {
    disciplines(config)?
        .iter()
        .map(|d| d.run(processes))
        .collect()
}
