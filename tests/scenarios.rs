//! End-to-end scenarios through the public API.

use u_cpusched::config::SimulationConfig;
use u_cpusched::io::{format_report, parse_processes};
use u_cpusched::models::{DisciplineKind, Process};
use u_cpusched::scheduler::{run_all, Discipline, Fcfs, RoundRobin, Sjf, Srtf};
use u_cpusched::sweep::{sweep_alpha, sweep_quantum, Grid};
use u_cpusched::SimError;

fn classic() -> Vec<Process> {
    parse_processes("1 0 5\n2 1 3\n3 2 1\n").unwrap()
}

#[test]
fn test_fcfs_classic() {
    let result = Fcfs.run(&classic()).unwrap();
    assert_eq!(result.event_pairs(), vec![(0.0, 1), (5.0, 2), (8.0, 3)]);
    assert!((result.average_waiting_time() - 10.0 / 3.0).abs() < 1e-10);
}

#[test]
fn test_rr_classic_quantum_two() {
    let result = RoundRobin::new(2.0).unwrap().run(&classic()).unwrap();
    // P1 is preempted at 2 once P2 and P3 have arrived; P2 runs before P3
    // and the preempted P1 goes behind both.
    assert_eq!(
        result.event_pairs(),
        vec![(0.0, 1), (2.0, 2), (4.0, 3), (5.0, 1), (7.0, 2), (8.0, 1)]
    );
    assert!((result.average_waiting_time() - 10.0 / 3.0).abs() < 1e-10);
}

#[test]
fn test_srtf_classic() {
    let result = Srtf.run(&classic()).unwrap();
    assert_eq!(
        result.event_pairs(),
        vec![(0.0, 1), (1.0, 2), (2.0, 3), (3.0, 2), (5.0, 1)]
    );
    assert!((result.average_waiting_time() - 5.0 / 3.0).abs() < 1e-10);
}

#[test]
fn test_sjf_classic() {
    // Only P1 has arrived at 0; at 5 all seeds are equal except P1's, so
    // P2 (lower index) runs before P3.
    let result = Sjf::new(0.5).unwrap().run(&classic()).unwrap();
    assert_eq!(result.event_pairs(), vec![(0.0, 1), (5.0, 2), (8.0, 3)]);
    assert!((result.average_waiting_time() - 10.0 / 3.0).abs() < 1e-10);
}

#[test]
fn test_run_all_reports() {
    let results = run_all(&classic(), &SimulationConfig::default()).unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[1].discipline, DisciplineKind::RoundRobin);
    assert_eq!(
        format_report(&results[2]),
        "(0, 1)\n(1, 2)\n(2, 3)\n(3, 2)\n(5, 1)\naverage waiting time 1.67 \n"
    );
}

#[test]
fn test_empty_input_is_an_error_everywhere() {
    assert!(matches!(Fcfs.run(&[]), Err(SimError::EmptyInput)));
    assert!(matches!(Srtf.run(&[]), Err(SimError::EmptyInput)));
    assert!(matches!(Sjf::default().run(&[]), Err(SimError::EmptyInput)));
    assert!(matches!(
        RoundRobin::new(1.0).unwrap().run(&[]),
        Err(SimError::EmptyInput)
    ));
    assert!(matches!(
        run_all(&[], &SimulationConfig::default()),
        Err(SimError::EmptyInput)
    ));
}

#[test]
fn test_malformed_input_stops_before_scheduling() {
    assert!(matches!(
        parse_processes("1 0 5\n2 1\n"),
        Err(SimError::MalformedRecord { line: 2, found: 2 })
    ));
}

#[test]
fn test_default_sweeps() {
    let config = SimulationConfig::default();
    let processes = classic();

    let rr = sweep_quantum(&processes, &config.quantum_grid, config.parallel_sweep).unwrap();
    assert_eq!(rr.points.len(), 100);
    let min = rr
        .points
        .iter()
        .map(|p| p.average_waiting_time)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(rr.best_average_waiting_time, min);

    let sjf = sweep_alpha(
        &processes,
        &config.alpha_grid,
        config.initial_prediction,
        config.parallel_sweep,
    )
    .unwrap();
    assert_eq!(sjf.points.len(), 101);
    // Every alpha yields the same order here, so the first grid value wins.
    assert_eq!(sjf.best_value, 0.0);
    assert!((sjf.best_average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
}

#[test]
fn test_sweep_tie_resolves_to_first_grid_value() {
    // A single process never waits: every quantum ties at 0.
    let processes = vec![Process::new(1, 0, 4)];
    let result = sweep_quantum(&processes, &Grid::new(0.5, 1, 8), true).unwrap();
    assert_eq!(result.best_value, 0.5);
    assert_eq!(result.best_average_waiting_time, 0.0);
}

#[test]
fn test_clock_overflow_is_rejected_not_panicking() {
    let half = i64::MAX / 2 + 1;
    let processes = vec![Process::new(1, 0, half), Process::new(2, 0, half)];
    assert!(matches!(
        Fcfs.run(&processes),
        Err(SimError::InvalidProcess { index: 1, .. })
    ));
    assert!(matches!(
        Sjf::default().run(&processes),
        Err(SimError::InvalidProcess { index: 1, .. })
    ));
    assert!(matches!(
        Srtf.run(&processes),
        Err(SimError::InvalidProcess { index: 1, .. })
    ));
}

#[test]
fn test_total_waiting_beyond_i64_is_summed_exactly() {
    // The horizon 4b fits in i64, but the waits 0 + b + 2b + 3b do not.
    let b = i64::MAX / 5;
    let processes: Vec<Process> = (1..=4).map(|id| Process::new(id, 0, b)).collect();
    let expected = 6.0 * b as f64;
    for result in [
        Fcfs.run(&processes).unwrap(),
        Sjf::default().run(&processes).unwrap(),
    ] {
        assert!(
            ((result.total_waiting_time - expected) / expected).abs() < 1e-12,
            "{}",
            result.discipline
        );
        assert_eq!(result.makespan, 4.0 * b as f64);
    }
}
