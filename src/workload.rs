//! Seeded random workload generation.
//!
//! Produces process lists for experiments and tests. Lists are sorted by
//! arrival time and use ids `1..=count`, so they satisfy the list-order
//! admission precondition of FCFS and SRTF.

use rand::prelude::*;

use crate::models::Process;

/// Generates `count` processes.
///
/// Inter-arrival gaps are uniform in `0..=max_interarrival` and bursts
/// uniform in `1..=max_burst` (a `max_burst` of 0 is treated as 1). The
/// same seed always yields the same list.
pub fn random_processes(
    count: usize,
    max_interarrival: i64,
    max_burst: i64,
    seed: u64,
) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_gap = max_interarrival.max(0);
    let max_burst = max_burst.max(1);

    let mut arrival = 0;
    let mut processes = Vec::with_capacity(count);
    for i in 0..count {
        if i > 0 {
            arrival += rng.random_range(0..=max_gap);
        }
        let burst = rng.random_range(1..=max_burst);
        processes.push(Process::new(i as i64 + 1, arrival, burst));
    }
    processes
}
