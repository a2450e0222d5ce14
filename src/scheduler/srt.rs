//! Shortest Remaining Time (preemptive) timeline builder.
//!
//! # Algorithm
//!
//! Conceptually the clock advances one unit at a time: at every unit the
//! arrived, unfinished process with the least remaining time runs for one
//! unit, ties going to the lowest input index.
//!
//! Between two arrivals the choice cannot change (the running process
//! only gets shorter, nothing new competes), so the builder grants the
//! whole stretch up to the next arrival or completion as one slice.
//! Start and finish times are identical to unit stepping.
//!
//! # Complexity
//! O(n²): one selection per arrival or completion event.

use tracing::{debug, trace};

use super::timeline::Timeline;
use crate::models::{ProcessSet, Schedule};

/// Per-run bookkeeping.
struct SrtState<'a> {
    set: &'a ProcessSet,
    remaining: Vec<i64>,
    completed: usize,
}

impl<'a> SrtState<'a> {
    fn new(set: &'a ProcessSet) -> Self {
        Self {
            set,
            remaining: set.processes().iter().map(|p| p.duration).collect(),
            completed: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.completed == self.set.len()
    }

    /// Arrived, unfinished process with the least remaining time.
    fn shortest_ready(&self, now: i64) -> Option<usize> {
        let processes = self.set.processes();
        (0..processes.len())
            .filter(|&i| self.remaining[i] > 0 && processes[i].arrival <= now)
            .min_by_key(|&i| self.remaining[i])
    }

    /// Earliest arrival strictly after `now` among unfinished processes.
    fn next_arrival_after(&self, now: i64) -> Option<i64> {
        self.set
            .processes()
            .iter()
            .zip(&self.remaining)
            .filter(|&(p, &left)| left > 0 && p.arrival > now)
            .map(|(p, _)| p.arrival)
            .min()
    }
}

/// Builds the SRT schedule.
pub fn srt(set: &ProcessSet) -> Schedule {
    let mut state = SrtState::new(set);
    let mut timeline = Timeline::new();

    while !state.is_done() {
        let now = timeline.now();
        let horizon = state.next_arrival_after(now);

        let Some(index) = state.shortest_ready(now) else {
            match horizon {
                Some(arrival) => timeline.idle_until(arrival),
                None => break,
            }
            continue;
        };

        let left = state.remaining[index];
        let units = horizon.map_or(left, |arrival| left.min(arrival - now));

        trace!(process = index, at = now, units, "srt dispatch");
        timeline.run(index, units);
        state.remaining[index] -= units;
        if state.remaining[index] == 0 {
            state.completed += 1;
        }
    }

    debug!(processes = set.len(), makespan = timeline.now(), "srt schedule built");
    timeline.into_schedule(set.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(processes: Vec<(i64, i64)>) -> ProcessSet {
        ProcessSet::new(2, processes).unwrap()
    }

    #[test]
    fn test_srt_preempts_for_shorter_arrival() {
        // P0 runs 0..1, P1 (2 units) arrives and beats P0's remaining 7.
        let schedule = srt(&set(vec![(0, 8), (1, 2)]));
        assert_eq!(schedule.start, vec![0, 1]);
        assert_eq!(schedule.finish, vec![10, 3]);
        assert_eq!(schedule.preemptions(), 1);
    }

    #[test]
    fn test_srt_classic_example() {
        // Textbook set: arrivals 0,1,2,3 durations 8,4,9,5.
        let schedule = srt(&set(vec![(0, 8), (1, 4), (2, 9), (3, 5)]));
        // P0 0..1, P1 1..5, P3 5..10, P0 10..17, P2 17..26
        assert_eq!(schedule.start, vec![0, 1, 17, 5]);
        assert_eq!(schedule.finish, vec![17, 5, 26, 10]);
    }

    #[test]
    fn test_srt_tie_keeps_lower_index() {
        // At t=2, P0 has 2 left and P1 needs 2: P0 keeps the CPU.
        let schedule = srt(&set(vec![(0, 4), (2, 2)]));
        assert_eq!(schedule.start, vec![0, 4]);
        assert_eq!(schedule.finish, vec![4, 6]);
    }

    #[test]
    fn test_srt_tie_prefers_lower_index_over_running() {
        // At t=2, P1 has 2 left and P0 (arriving) needs 2: P0 wins on index.
        let schedule = srt(&set(vec![(2, 2), (0, 4)]));
        assert_eq!(schedule.start, vec![2, 0]);
        assert_eq!(schedule.finish, vec![4, 6]);
    }

    #[test]
    fn test_srt_idle_gap() {
        let schedule = srt(&set(vec![(0, 1), (5, 2)]));
        assert_eq!(schedule.start, vec![0, 5]);
        assert_eq!(schedule.finish, vec![1, 7]);
    }

    #[test]
    fn test_srt_executes_exact_durations() {
        let input = set(vec![(0, 7), (2, 4), (4, 1), (5, 4)]);
        let schedule = srt(&input);
        for (i, p) in input.processes().iter().enumerate() {
            assert_eq!(schedule.executed(i), p.duration);
        }
        assert!(schedule.is_exclusive());
    }
}
