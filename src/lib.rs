//! Deterministic CPU scheduling simulator.
//!
//! Simulates a single CPU over a fixed, fully known process list under
//! four classic disciplines and reports the CPU switch timeline and the
//! average waiting time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Schedule`, `ScheduleEvent`,
//!   `SimulationResult`, `ProcessOutcome`
//! - **`scheduler`**: The `Discipline` trait with `Fcfs`, `RoundRobin`,
//!   `Srtf`, and `Sjf`
//! - **`sweep`**: Parameter search for the RR quantum and SJF smoothing factor
//! - **`validation`**: Input integrity checks (empty list, bad arrival/burst)
//! - **`io`**: Process list parsing and report writing
//! - **`config`**: JSON-loadable session configuration
//! - **`workload`**: Seeded random process lists
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::{Discipline, Fcfs};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 1),
//! ];
//! let result = Fcfs.run(&processes).unwrap();
//! assert_eq!(result.event_pairs(), vec![(0.0, 1), (5.0, 2), (8.0, 3)]);
//! assert!((result.average_waiting_time() - 10.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod sweep;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimResult};
