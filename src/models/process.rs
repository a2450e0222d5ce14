//! Process and process-set models.
//!
//! A process is a unit of CPU work described only by when it becomes
//! ready and how many time units it needs. Its identity is its position
//! in the input order; every schedule and metric is reported against
//! that index, even when a discipline reorders its working copy.
//!
//! # Time Representation
//! Time is a discrete integer clock starting at t=0. One unit is the
//! smallest amount of CPU time that can be granted.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::validation::validate_input;

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Time unit at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time units the process requires.
    pub duration: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(arrival: i64, duration: i64) -> Self {
        Self { arrival, duration }
    }
}

impl From<(i64, i64)> for Process {
    fn from((arrival, duration): (i64, i64)) -> Self {
        Self::new(arrival, duration)
    }
}

/// An immutable, validated set of processes plus the Round Robin quantum.
///
/// Construction enforces `quantum > 0`, `arrival >= 0` and `duration > 0`,
/// and that the latest arrival plus [`total_work`](Self::total_work) fits
/// in an `i64`. Every timeline builder can therefore assume well-formed
/// input whose clock never overflows. An empty set is
/// allowed; metrics over it fail with [`SimulationError::EmptyInput`].
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSet;
///
/// let set = ProcessSet::new(2, vec![(0, 5), (1, 3)]).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.quantum(), 2);
/// assert_eq!(set.total_work(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProcessSet", into = "RawProcessSet")]
pub struct ProcessSet {
    quantum: i64,
    processes: Vec<Process>,
}

/// Unvalidated wire form of a [`ProcessSet`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProcessSet {
    quantum: i64,
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates a validated process set from `(arrival, duration)` pairs.
    ///
    /// # Errors
    /// The first problem reported by [`validate_input`]:
    /// [`SimulationError::InvalidQuantum`],
    /// [`SimulationError::InvalidProcess`] or
    /// [`SimulationError::HorizonOverflow`].
    pub fn new<P: Into<Process>>(
        quantum: i64,
        processes: impl IntoIterator<Item = P>,
    ) -> Result<Self, SimulationError> {
        let processes: Vec<Process> = processes.into_iter().map(Into::into).collect();
        let pairs: Vec<(i64, i64)> = processes.iter().map(|p| (p.arrival, p.duration)).collect();

        if let Err(errors) = validate_input(quantum, &pairs) {
            if let Some(first) = errors.into_iter().next() {
                return Err(first);
            }
        }

        Ok(Self { quantum, processes })
    }

    /// Round Robin time quantum.
    #[inline]
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Processes in input order.
    #[inline]
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Process at original index `index`.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Number of processes.
    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set has no processes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all durations: the CPU time any discipline must grant.
    pub fn total_work(&self) -> i64 {
        self.processes.iter().map(|p| p.duration).sum()
    }

    /// Original indices sorted by arrival; equal arrivals keep input order.
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.processes.len()).collect();
        order.sort_by_key(|&i| self.processes[i].arrival);
        order
    }

    /// Earliest arrival among processes not yet marked in `taken`.
    pub(crate) fn next_arrival(&self, taken: &[bool]) -> Option<i64> {
        self.processes
            .iter()
            .zip(taken)
            .filter(|&(_, &taken)| !taken)
            .map(|(p, _)| p.arrival)
            .min()
    }
}

impl TryFrom<RawProcessSet> for ProcessSet {
    type Error = SimulationError;

    fn try_from(raw: RawProcessSet) -> Result<Self, Self::Error> {
        Self::new(raw.quantum, raw.processes)
    }
}

impl From<ProcessSet> for RawProcessSet {
    fn from(set: ProcessSet) -> Self {
        Self {
            quantum: set.quantum,
            processes: set.processes,
        }
    }
}
