//! Command-line driver.
//!
//! ```text
//! u-cpusched [--config FILE] [--output DIR] [--generate N] [--seed S] [INPUT]
//! ```
//!
//! Reads the process list (or generates one), runs FCFS, RR, SRTF and SJF,
//! writes one report per discipline, then sweeps the RR quantum and the
//! SJF smoothing factor and prints the best values.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use u_cpusched::config::SimulationConfig;
use u_cpusched::models::{DisciplineKind, Process};
use u_cpusched::scheduler::Discipline;
use u_cpusched::sweep::{sweep_alpha, sweep_quantum};
use u_cpusched::{io, scheduler, workload, SimError, SimResult};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    input: Option<PathBuf>,
    generate: Option<usize>,
    seed: u64,
}

fn parse_args() -> SimResult<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |flag: &'static str| {
            iter.next().ok_or(SimError::InvalidParameter {
                name: flag,
                reason: "missing value".into(),
            })
        };
        match arg.as_str() {
            "--config" => args.config = Some(value("--config")?.into()),
            "--output" => args.output = Some(value("--output")?.into()),
            "--generate" => {
                let raw = value("--generate")?;
                args.generate = Some(raw.parse().map_err(|_| SimError::InvalidParameter {
                    name: "--generate",
                    reason: format!("`{raw}` is not a count"),
                })?);
            }
            "--seed" => {
                let raw = value("--seed")?;
                args.seed = raw.parse().map_err(|_| SimError::InvalidParameter {
                    name: "--seed",
                    reason: format!("`{raw}` is not an unsigned integer"),
                })?;
            }
            _ => args.input = Some(PathBuf::from(&arg)),
        }
    }
    Ok(args)
}

fn run() -> SimResult<()> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }

    let processes: Vec<Process> = match args.generate {
        Some(count) => workload::random_processes(count, 3, 10, args.seed),
        None => io::read_processes(&config.input)?,
    };

    println!("printing input ----");
    for process in &processes {
        println!("{process}");
    }

    std::fs::create_dir_all(&config.output_dir)?;
    let mut results = Vec::with_capacity(DisciplineKind::ALL.len());
    for discipline in scheduler::disciplines(&config)? {
        println!("simulating {} ----", discipline.kind());
        let result = discipline.run(&processes)?;
        io::write_report(&config.output_dir, &result)?;
        results.push(result);
    }

    let rr_sweep = sweep_quantum(&processes, &config.quantum_grid, config.parallel_sweep)?;
    println!("\nOptimal value of Q for RR is {}", rr_sweep.best_value);
    println!(
        "with an average waiting time of {}",
        rr_sweep.best_average_waiting_time
    );

    let sjf_sweep = sweep_alpha(
        &processes,
        &config.alpha_grid,
        config.initial_prediction,
        config.parallel_sweep,
    )?;
    println!("\nOptimal value of alpha for SJF is {}", sjf_sweep.best_value);
    println!(
        "with an average waiting time of {}",
        sjf_sweep.best_average_waiting_time
    );

    if config.write_json {
        let path = io::write_summary_json(&config.output_dir, &results, &[rr_sweep, sjf_sweep])?;
        tracing::info!(path = %path.display(), "wrote summary");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "simulation aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
