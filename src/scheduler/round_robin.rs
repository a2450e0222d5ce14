//! Round Robin timeline builder.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= 0` to a FIFO ready queue, in
//!    input order. Each process is admitted exactly once.
//! 2. Dequeue the head and run it for `min(quantum, remaining)` units.
//! 3. Admit everything that arrived by the new clock (input order).
//! 4. Only then re-queue the process just run if it still has work;
//!    otherwise record its completion.
//! 5. With an empty queue and unfinished work, idle until the next
//!    arrival and admit it.
//!
//! Step 3 before step 4 is the usual fairness convention: a newcomer is
//! served before the process it arrived behind gets another turn.
//!
//! # Complexity
//! O(d · n / q) for total work d and quantum q.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::timeline::Timeline;
use crate::models::{ProcessSet, Schedule};

/// Ready queue plus admission and remaining-time bookkeeping.
struct ReadyQueue<'a> {
    set: &'a ProcessSet,
    queue: VecDeque<usize>,
    admitted: Vec<bool>,
    remaining: Vec<i64>,
}

impl<'a> ReadyQueue<'a> {
    fn new(set: &'a ProcessSet) -> Self {
        Self {
            set,
            queue: VecDeque::with_capacity(set.len()),
            admitted: vec![false; set.len()],
            remaining: set.processes().iter().map(|p| p.duration).collect(),
        }
    }

    /// Appends every not-yet-admitted process that has arrived by `now`.
    fn admit_arrivals(&mut self, now: i64) {
        let set = self.set;
        for (index, process) in set.processes().iter().enumerate() {
            if !self.admitted[index] && process.arrival <= now {
                self.admitted[index] = true;
                self.queue.push_back(index);
            }
        }
    }

    fn next_arrival(&self) -> Option<i64> {
        self.set.next_arrival(&self.admitted)
    }
}

/// Builds the Round Robin schedule using the set's quantum.
pub fn round_robin(set: &ProcessSet) -> Schedule {
    let quantum = set.quantum();
    let mut ready = ReadyQueue::new(set);
    let mut timeline = Timeline::new();
    let mut completed = 0;

    ready.admit_arrivals(timeline.now());

    while completed < set.len() {
        let Some(index) = ready.queue.pop_front() else {
            match ready.next_arrival() {
                Some(arrival) => {
                    timeline.idle_until(arrival);
                    ready.admit_arrivals(timeline.now());
                }
                None => break,
            }
            continue;
        };

        let units = quantum.min(ready.remaining[index]);
        trace!(process = index, at = timeline.now(), units, "rr dispatch");
        timeline.run(index, units);
        ready.remaining[index] -= units;

        // Newcomers first, then the returning process.
        ready.admit_arrivals(timeline.now());
        if ready.remaining[index] > 0 {
            ready.queue.push_back(index);
        } else {
            completed += 1;
        }
    }

    debug!(
        processes = set.len(),
        quantum,
        makespan = timeline.now(),
        "round robin schedule built"
    );
    timeline.into_schedule(set.len())
}
