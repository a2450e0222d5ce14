//! Timeline builders, metrics and the simulation driver.
//!
//! Each discipline is a pure function from a [`ProcessSet`] to a
//! [`Schedule`]. Builders keep their bookkeeping on the stack and share
//! nothing, so running the same set twice yields identical schedules.
//!
//! # Disciplines
//!
//! | Discipline | Preemptive | Selection |
//! |------------|------------|-----------|
//! | FIFO | no | earliest arrival |
//! | SJF | no | shortest duration among arrived |
//! | SRT | yes, per unit | least remaining time among arrived |
//! | Round Robin | yes, per quantum | ready-queue order |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::ProcessSet;
//! use u_cpusched::scheduler::{compute_metrics, Discipline};
//!
//! let set = ProcessSet::new(2, vec![(0, 5), (0, 3)]).unwrap();
//! let schedule = Discipline::Sjf.build(&set);
//! assert_eq!(schedule.start, vec![3, 0]);
//!
//! let metrics = compute_metrics(&set, &schedule).unwrap();
//! assert_eq!(metrics.avg_turnaround, 5.5);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod driver;
mod fifo;
mod kpi;
mod round_robin;
mod sjf;
mod srt;
mod timeline;

pub use driver::{run_all, run_discipline, simulate, DisciplineReport};
pub use fifo::fifo;
pub use kpi::{compute_metrics, process_times, MetricTriple, ProcessTimes};
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use srt::srt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessSet, Schedule};

/// A CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// First-In-First-Out.
    Fifo,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time, preemptive.
    Srt,
    /// Round Robin with the set's quantum.
    RoundRobin,
}

impl Discipline {
    /// All disciplines in reporting order.
    pub const ALL: [Discipline; 4] = [Self::Fifo, Self::Sjf, Self::Srt, Self::RoundRobin];

    /// Builds this discipline's schedule for `set`.
    pub fn build(self, set: &ProcessSet) -> Schedule {
        match self {
            Self::Fifo => fifo(set),
            Self::Sjf => sjf(set),
            Self::Srt => srt(set),
            Self::RoundRobin => round_robin(set),
        }
    }

    /// Short identifier, also used for logging.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Sjf => "sjf",
            Self::Srt => "srt",
            Self::RoundRobin => "rr",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srt | Self::RoundRobin)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fifo => "FIFO",
            Self::Sjf => "SJF",
            Self::Srt => "SRT",
            Self::RoundRobin => "RR",
        })
    }
}

impl FromStr for Discipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(Self::Fifo),
            "sjf" => Ok(Self::Sjf),
            "srt" | "srtf" => Ok(Self::Srt),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(format!(
                "Invalid discipline '{s}'. Valid: fifo, sjf, srt, rr"
            )),
        }
    }
}

/// Builds the schedule for `set` under `discipline`.
pub fn build_schedule(set: &ProcessSet, discipline: Discipline) -> Schedule {
    discipline.build(set)
}
