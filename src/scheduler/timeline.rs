//! Clock and slice recorder shared by the timeline builders.

use crate::models::{Schedule, Slice};

/// Single-CPU simulated clock that records every grant.
///
/// Each builder owns one for the duration of a run and converts it into
/// a [`Schedule`] when done.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    clock: i64,
    slices: Vec<Slice>,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    #[inline]
    pub(crate) fn now(&self) -> i64 {
        self.clock
    }

    /// Leaves the CPU idle until `time`. No-op if `time` is not ahead.
    pub(crate) fn idle_until(&mut self, time: i64) {
        self.clock = self.clock.max(time);
    }

    /// Runs `process` for `units` and advances the clock past the slice.
    pub(crate) fn run(&mut self, process: usize, units: i64) {
        let start = self.clock;
        self.clock += units;
        self.slices.push(Slice::new(process, start, self.clock));
    }

    pub(crate) fn into_schedule(self, process_count: usize) -> Schedule {
        Schedule::from_slices(process_count, self.slices)
    }
}
