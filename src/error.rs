//! Error types for simulation and input handling.
//!
//! Core errors are detected synchronously and never retried: the
//! simulation is a pure function of its input, so a retry cannot change
//! the outcome.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the simulation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The process set has no processes; averages are undefined.
    #[error("process set is empty; metrics are undefined")]
    EmptyInput,

    /// Round Robin quantum must be positive.
    #[error("invalid quantum {quantum}: must be positive")]
    InvalidQuantum { quantum: i64 },

    /// A process has a negative arrival or a non-positive duration.
    #[error("invalid process #{index} (arrival {arrival}, duration {duration}): {reason}")]
    InvalidProcess {
        index: usize,
        arrival: i64,
        duration: i64,
        reason: &'static str,
    },

    /// The latest arrival plus the total work does not fit in an `i64`,
    /// so some schedule could run past the representable clock.
    #[error("time horizon overflows: latest arrival {max_arrival} plus total work exceeds i64")]
    HorizonOverflow { max_arrival: i64 },

    /// A schedule was paired with a process set of a different size.
    #[error("schedule covers {actual} processes, process set has {expected}")]
    ScheduleMismatch { expected: usize, actual: usize },
}

/// Errors raised while reading process files or writing results.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input has no quantum line.
    #[error("input is empty: expected a quantum on the first line")]
    MissingQuantum,

    /// A line could not be parsed.
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl InputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias for core results.
pub type Result<T, E = SimulationError> = std::result::Result<T, E>;
