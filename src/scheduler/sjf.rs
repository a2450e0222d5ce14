//! Shortest Job First (non-preemptive) timeline builder.
//!
//! # Algorithm
//!
//! At every decision point, among processes that have arrived and not
//! yet started, pick the one with the smallest duration and run it to
//! completion. When nothing is ready the CPU idles until the next
//! arrival, which yields the same times as idling one unit at a time.
//!
//! # Tie-break
//! Equal durations go to the earliest arrival, then the lowest input
//! index: the first candidate in stable arrival order.
//!
//! # Complexity
//! O(n²).

use tracing::{debug, trace};

use super::timeline::Timeline;
use crate::models::{ProcessSet, Schedule};

/// Builds the SJF schedule.
pub fn sjf(set: &ProcessSet) -> Schedule {
    let processes = set.processes();
    let order = set.arrival_order();
    let mut started = vec![false; set.len()];
    let mut timeline = Timeline::new();

    let shortest_ready = |started: &[bool], now: i64| {
        order
            .iter()
            .copied()
            .filter(|&i| !started[i] && processes[i].arrival <= now)
            .min_by_key(|&i| processes[i].duration)
    };

    let mut completed = 0;
    while completed < set.len() {
        let Some(index) = shortest_ready(&started[..], timeline.now()) else {
            // Nothing ready: every unstarted process arrives later.
            match set.next_arrival(&started) {
                Some(arrival) => timeline.idle_until(arrival),
                None => break,
            }
            continue;
        };

        trace!(process = index, at = timeline.now(), "sjf dispatch");
        started[index] = true;
        timeline.run(index, processes[index].duration);
        completed += 1;
    }

    debug!(processes = set.len(), makespan = timeline.now(), "sjf schedule built");
    timeline.into_schedule(set.len())
}
