//! Schedule (timeline) model.
//!
//! A schedule is the outcome of running one discipline over a process
//! set: the ordered CPU slices granted, plus the per-process first-start
//! and completion times derived from them. All arrays are indexed by the
//! process's original input position.

use serde::{Deserialize, Serialize};

/// A contiguous span of CPU time granted to one process.
///
/// Covers the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Original index of the process that ran.
    pub process: usize,
    /// First time unit of the slice.
    pub start: i64,
    /// Time at which the slice's last unit completes.
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process: usize, start: i64, end: i64) -> Self {
        Self {
            process,
            start,
            end,
        }
    }

    /// Length of the slice in time units.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the slice covers no time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Per-process start and finish times for one discipline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// First time unit each process occupies the CPU.
    pub start: Vec<i64>,
    /// Time at which each process's last unit completes.
    pub finish: Vec<i64>,
    /// CPU slices in the order they were granted.
    pub slices: Vec<Slice>,
}

impl Schedule {
    /// Derives start and finish times for `process_count` processes from
    /// time-ordered slices.
    ///
    /// A process with no slice keeps start and finish at 0; valid process
    /// sets never produce one since every duration is positive. Slices
    /// naming a process at or past `process_count` are kept in `slices`
    /// but contribute no start or finish time.
    pub fn from_slices(process_count: usize, slices: Vec<Slice>) -> Self {
        let mut start: Vec<Option<i64>> = vec![None; process_count];
        let mut finish = vec![0; process_count];

        for slice in &slices {
            if let (Some(first), Some(last)) =
                (start.get_mut(slice.process), finish.get_mut(slice.process))
            {
                first.get_or_insert(slice.start);
                *last = (*last).max(slice.end);
            }
        }

        Self {
            start: start.into_iter().map(Option::unwrap_or_default).collect(),
            finish,
            slices,
        }
    }

    /// Number of processes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.start.len()
    }

    /// Whether the schedule covers no processes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }

    /// Latest completion time across all processes.
    pub fn makespan(&self) -> i64 {
        self.finish.iter().copied().max().unwrap_or(0)
    }

    /// Total CPU time granted to `process`.
    pub fn executed(&self, process: usize) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process == process)
            .map(Slice::len)
            .sum()
    }

    /// Slices granted to `process`, in time order.
    pub fn slices_for(&self, process: usize) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.process == process).collect()
    }

    /// Number of times a process was resumed after being interrupted.
    ///
    /// Slices for processes outside `0..len()` are not counted.
    pub fn preemptions(&self) -> usize {
        let mut seen = vec![false; self.len()];
        let mut count = 0;
        let mut previous: Option<&Slice> = None;

        for slice in &self.slices {
            let continues = previous
                .is_some_and(|p| p.process == slice.process && p.end == slice.start);
            if let Some(seen) = seen.get_mut(slice.process) {
                if *seen && !continues {
                    count += 1;
                }
                *seen = true;
            }
            previous = Some(slice);
        }

        count
    }

    /// Whether no two slices overlap in time (single CPU).
    pub fn is_exclusive(&self) -> bool {
        let mut sorted: Vec<&Slice> = self.slices.iter().collect();
        sorted.sort_by_key(|s| s.start);
        sorted.windows(2).all(|w| w[0].end <= w[1].start)
    }
}
