//! Process list input and report output.
//!
//! # Input format
//!
//! One process per line, three whitespace-separated integers:
//!
//! ```text
//! id arrival_time burst_time
//! ```
//!
//! Blank lines are skipped. A line with any other field count is a
//! fatal error reported before any scheduling happens.
//!
//! # Report format
//!
//! One `(time, id)` line per schedule event, followed by
//! `average waiting time X.XX `.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{SimError, SimResult};
use crate::models::{Process, SimulationResult};
use crate::sweep::SweepResult;

/// Parses a process list from text.
pub fn parse_processes(text: &str) -> SimResult<Vec<Process>> {
    let mut processes = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(SimError::MalformedRecord {
                line: line_no,
                found: fields.len(),
            });
        }

        let parse = |s: &str| {
            s.parse::<i64>().map_err(|_| SimError::InvalidNumber {
                line: line_no,
                value: s.to_string(),
            })
        };
        processes.push(Process::new(
            parse(fields[0])?,
            parse(fields[1])?,
            parse(fields[2])?,
        ));
    }

    Ok(processes)
}

/// Reads a process list from a file.
pub fn read_processes(path: impl AsRef<Path>) -> SimResult<Vec<Process>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let processes = parse_processes(&text)?;
    tracing::debug!(path = %path.display(), count = processes.len(), "read process list");
    Ok(processes)
}

/// Renders a result in the report format.
pub fn format_report(result: &SimulationResult) -> String {
    let mut out = String::new();
    for event in &result.schedule {
        let _ = writeln!(out, "{event}");
    }
    let _ = writeln!(
        out,
        "average waiting time {:.2} ",
        result.average_waiting_time()
    );
    out
}

/// Report file name for a result (`FCFS.txt`, `RR.txt`, ...).
pub fn report_file_name(result: &SimulationResult) -> String {
    format!("{}.txt", result.discipline.label())
}

/// Writes a result's report into `dir` and returns the file path.
pub fn write_report(dir: impl AsRef<Path>, result: &SimulationResult) -> SimResult<PathBuf> {
    let path = dir.as_ref().join(report_file_name(result));
    std::fs::write(&path, format_report(result))?;
    tracing::debug!(path = %path.display(), "wrote report");
    Ok(path)
}

#[derive(Serialize)]
struct Summary<'a> {
    results: &'a [SimulationResult],
    sweeps: &'a [SweepResult],
}

/// Writes every result and sweep to `summary.json` in `dir`.
pub fn write_summary_json(
    dir: impl AsRef<Path>,
    results: &[SimulationResult],
    sweeps: &[SweepResult],
) -> SimResult<PathBuf> {
    let path = dir.as_ref().join("summary.json");
    let json = serde_json::to_string_pretty(&Summary { results, sweeps })?;
    std::fs::write(&path, json)?;
    Ok(path)
}
