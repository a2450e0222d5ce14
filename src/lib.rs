//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates four classic single-CPU disciplines over a fixed set of
//! processes and reports average response, waiting and turnaround time
//! for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessSet`, `Schedule`, `Slice`
//! - **`scheduler`**: FIFO, SJF, SRT and Round Robin timeline builders,
//!   metrics (`MetricTriple`) and the `run_all` driver
//! - **`validation`**: Input checks (quantum, arrivals, durations)
//! - **`io`**: Process-file reader, result writer and batch driver
//! - **`config`**: Batch naming and directory configuration
//! - **`workload`**: Seeded synthetic process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessSet;
//! use u_cpusched::scheduler::run_all;
//!
//! let set = ProcessSet::new(2, vec![(0, 5), (0, 3)]).unwrap();
//! let [fifo, sjf, _srt, _rr] = run_all(&set).unwrap();
//! assert_eq!(fifo.avg_turnaround, 6.5);
//! assert_eq!(sjf.avg_turnaround, 5.5);
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
pub mod validation;
pub mod workload;

pub use error::{InputError, SimulationError};
