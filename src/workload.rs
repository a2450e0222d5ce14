//! Synthetic workload generation.
//!
//! Produces reproducible process sets from a seeded RNG, for exercising
//! the disciplines beyond hand-written inputs.
//!
//! # Model
//! Bernoulli arrivals: at each tick in `0..ticks` a process arrives with
//! probability `p_arrival`. Its duration is `short` with probability
//! `p_short`, otherwise `long` (a bimodal mix of interactive and batch
//! jobs).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Process, ProcessSet};

/// Parameters of a Bernoulli-arrival workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BernoulliWorkload {
    /// Number of ticks during which processes may arrive.
    pub ticks: i64,
    /// Per-tick arrival probability (0.0..=1.0).
    pub p_arrival: f64,
    /// Probability that an arriving process is short (0.0..=1.0).
    pub p_short: f64,
    /// Duration of a short process.
    pub short: i64,
    /// Duration of a long process.
    pub long: i64,
    /// Round Robin quantum of the generated set.
    pub quantum: i64,
}

impl Default for BernoulliWorkload {
    fn default() -> Self {
        Self {
            ticks: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short: 2,
            long: 6,
            quantum: 2,
        }
    }
}

impl BernoulliWorkload {
    /// Creates the default workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival window length.
    pub fn with_ticks(mut self, ticks: i64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the per-tick arrival probability.
    pub fn with_arrival_probability(mut self, p: f64) -> Self {
        self.p_arrival = p;
        self
    }

    /// Sets short/long durations and the share of short processes.
    pub fn with_durations(mut self, short: i64, long: i64, p_short: f64) -> Self {
        self.short = short;
        self.long = long;
        self.p_short = p_short;
        self
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Generates a process set from `seed`. Same seed, same set.
    ///
    /// # Errors
    /// Propagates [`ProcessSet::new`] validation (non-positive durations or
    /// quantum).
    pub fn generate(&self, seed: u64) -> Result<ProcessSet, SimulationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut processes = Vec::new();

        for tick in 0..self.ticks.max(0) {
            if rng.random::<f64>() < self.p_arrival {
                let duration = if rng.random::<f64>() < self.p_short {
                    self.short
                } else {
                    self.long
                };
                processes.push(Process::new(tick, duration));
            }
        }

        ProcessSet::new(self.quantum, processes)
    }
}
