//! First-In-First-Out timeline builder.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Walk the sorted list with a single clock; if the next process has
//!    not arrived yet, idle until it does.
//! 3. Run each process to completion.
//!
//! # Complexity
//! O(n log n).

use tracing::debug;

use super::timeline::Timeline;
use crate::models::{ProcessSet, Schedule};

/// Builds the FIFO schedule.
pub fn fifo(set: &ProcessSet) -> Schedule {
    let processes = set.processes();
    let mut timeline = Timeline::new();

    for index in set.arrival_order() {
        let process = processes[index];
        timeline.idle_until(process.arrival);
        timeline.run(index, process.duration);
    }

    debug!(processes = set.len(), makespan = timeline.now(), "fifo schedule built");
    timeline.into_schedule(set.len())
}
