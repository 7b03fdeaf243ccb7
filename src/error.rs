//! Error types for simulation runs, input parsing, and configuration.

use thiserror::Error;

use crate::models::ProcessId;

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised before or instead of a simulation run.
///
/// Scheduling itself is deterministic and cannot fail once the input
/// has passed validation; every variant here is an input, parameter,
/// or I/O problem.
#[derive(Debug, Error)]
pub enum SimError {
    /// The process list contains no processes.
    #[error("process list is empty")]
    EmptyInput,

    /// A process has an arrival or burst time the simulator cannot run.
    #[error("invalid process at position {index} (id {id}): {reason}")]
    InvalidProcess {
        index: usize,
        id: ProcessId,
        reason: String,
    },

    /// A discipline or sweep parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// An input line does not have exactly three fields.
    #[error("malformed record on line {line}: expected 3 fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    /// An input field is not an integer.
    #[error("line {line}: cannot parse `{value}` as an integer")]
    InvalidNumber { line: usize, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
