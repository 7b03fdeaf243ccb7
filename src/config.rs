//! Simulation configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid
//! configuration file:
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//!
//! let config: SimulationConfig = serde_json::from_str(r#"{ "time_quantum": 4 }"#).unwrap();
//! assert_eq!(config.time_quantum, 4.0);
//! assert_eq!(config.alpha, 0.5);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::scheduler::{RoundRobin, Sjf, DEFAULT_INITIAL_PREDICTION};
use crate::sweep::Grid;

/// Parameters for a full simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Process list file.
    pub input: PathBuf,
    /// Directory receiving `FCFS.txt`, `RR.txt`, `SRTF.txt`, `SJF.txt`.
    pub output_dir: PathBuf,
    /// Round-Robin quantum for the reported run.
    pub time_quantum: f64,
    /// SJF smoothing factor for the reported run.
    pub alpha: f64,
    /// SJF prediction every id starts with.
    pub initial_prediction: f64,
    /// Quanta searched by the Round-Robin sweep.
    pub quantum_grid: Grid,
    /// Smoothing factors searched by the SJF sweep.
    pub alpha_grid: Grid,
    /// Evaluate sweep grid points on worker threads.
    pub parallel_sweep: bool,
    /// Also write `summary.json` with every result.
    pub write_json: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output_dir: PathBuf::from("."),
            time_quantum: 2.0,
            alpha: 0.5,
            initial_prediction: DEFAULT_INITIAL_PREDICTION,
            quantum_grid: Grid::new(0.1, 1, 100),
            alpha_grid: Grid::new(0.001, 0, 100),
            parallel_sweep: true,
            write_json: false,
        }
    }
}

impl SimulationConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter, including every sweep grid point.
    pub fn validate(&self) -> SimResult<()> {
        RoundRobin::new(self.time_quantum)?;
        Sjf::new(self.alpha)?.with_initial_prediction(self.initial_prediction)?;

        if self.quantum_grid.is_empty() {
            return Err(SimError::parameter("quantum_grid", "grid has no points"));
        }
        for q in self.quantum_grid.values() {
            RoundRobin::new(q).map_err(|_| {
                SimError::parameter("quantum_grid", format!("quantum {q} is not positive"))
            })?;
        }

        if self.alpha_grid.is_empty() {
            return Err(SimError::parameter("alpha_grid", "grid has no points"));
        }
        for a in self.alpha_grid.values() {
            Sjf::new(a).map_err(|_| {
                SimError::parameter("alpha_grid", format!("alpha {a} is outside [0, 1]"))
            })?;
        }
        Ok(())
    }
}
