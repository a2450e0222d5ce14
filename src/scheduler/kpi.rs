//! Schedule quality metrics.
//!
//! Derives per-process times from a schedule and averages them over the
//! process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Response | start − arrival |
//! | Waiting | equals response (processes have no I/O bursts) |
//! | Turnaround | finish − arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{ProcessSet, Schedule};

/// Times observed for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTimes {
    pub response: i64,
    pub waiting: i64,
    pub turnaround: i64,
}

/// Average response, waiting and turnaround time for one discipline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTriple {
    pub avg_response: f64,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl MetricTriple {
    /// Computes averaged metrics from a schedule and its process set.
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`] if the set has no processes.
    /// - [`SimulationError::ScheduleMismatch`] if the schedule was built
    ///   for a set of a different size.
    pub fn calculate(set: &ProcessSet, schedule: &Schedule) -> Result<Self> {
        let times = process_times(set, schedule)?;
        if times.is_empty() {
            return Err(SimulationError::EmptyInput);
        }

        let n = times.len() as f64;
        // Each time fits in i64; their sum may not.
        let mean = |f: fn(&ProcessTimes) -> i64| {
            times.iter().map(|t| i128::from(f(t))).sum::<i128>() as f64 / n
        };

        Ok(Self {
            avg_response: mean(|t| t.response),
            avg_waiting: mean(|t| t.waiting),
            avg_turnaround: mean(|t| t.turnaround),
        })
    }

    /// The three averages in reporting order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.avg_response, self.avg_waiting, self.avg_turnaround]
    }
}

/// Per-process times, indexed by original input position.
///
/// # Errors
/// [`SimulationError::ScheduleMismatch`] if the lengths differ.
pub fn process_times(set: &ProcessSet, schedule: &Schedule) -> Result<Vec<ProcessTimes>> {
    if schedule.start.len() != set.len() || schedule.finish.len() != set.len() {
        return Err(SimulationError::ScheduleMismatch {
            expected: set.len(),
            actual: schedule.start.len().min(schedule.finish.len()),
        });
    }

    Ok(set
        .processes()
        .iter()
        .zip(schedule.start.iter().zip(&schedule.finish))
        .map(|(process, (&start, &finish))| {
            let response = start - process.arrival;
            ProcessTimes {
                response,
                waiting: response,
                turnaround: finish - process.arrival,
            }
        })
        .collect())
}

/// Computes averaged metrics for `schedule`. See [`MetricTriple::calculate`].
pub fn compute_metrics(set: &ProcessSet, schedule: &Schedule) -> Result<MetricTriple> {
    MetricTriple::calculate(set, schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slice;

    #[test]
    fn test_metrics_basic() {
        let set = ProcessSet::new(2, vec![(0, 5), (0, 3)]).unwrap();
        let schedule = Schedule::from_slices(2, vec![Slice::new(0, 0, 5), Slice::new(1, 5, 8)]);

        let metrics = compute_metrics(&set, &schedule).unwrap();
        assert!((metrics.avg_response - 2.5).abs() < 1e-10); // (0+5)/2
        assert!((metrics.avg_waiting - 2.5).abs() < 1e-10);
        assert!((metrics.avg_turnaround - 6.5).abs() < 1e-10); // (5+8)/2
    }

    #[test]
    fn test_metrics_use_arrival() {
        let set = ProcessSet::new(1, vec![(2, 2), (3, 1)]).unwrap();
        let schedule = Schedule::from_slices(2, vec![Slice::new(0, 2, 4), Slice::new(1, 4, 5)]);

        let times = process_times(&set, &schedule).unwrap();
        assert_eq!(
            times,
            vec![
                ProcessTimes {
                    response: 0,
                    waiting: 0,
                    turnaround: 2
                },
                ProcessTimes {
                    response: 1,
                    waiting: 1,
                    turnaround: 2
                },
            ]
        );
    }

    #[test]
    fn test_metrics_empty() {
        let set = ProcessSet::new(1, Vec::<(i64, i64)>::new()).unwrap();
        let err = compute_metrics(&set, &Schedule::default()).unwrap_err();
        assert_eq!(err, SimulationError::EmptyInput);
    }

    #[test]
    fn test_metrics_schedule_mismatch() {
        let set = ProcessSet::new(1, vec![(0, 1), (0, 1)]).unwrap();
        let schedule = Schedule::from_slices(1, vec![Slice::new(0, 0, 1)]);
        let err = compute_metrics(&set, &schedule).unwrap_err();
        assert_eq!(
            err,
            SimulationError::ScheduleMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_metrics_sum_past_i64() {
        // Turnarounds of half and all of i64::MAX sum beyond i64.
        let half = i64::MAX / 2;
        let set = ProcessSet::new(1, vec![(0, half), (0, half)]).unwrap();
        let schedule = Schedule::from_slices(
            2,
            vec![Slice::new(0, 0, half), Slice::new(1, half, 2 * half)],
        );

        let metrics = compute_metrics(&set, &schedule).unwrap();
        let expected = (half as f64 + (2 * half) as f64) / 2.0;
        assert!((metrics.avg_turnaround - expected).abs() / expected < 1e-12);
        assert!((metrics.avg_response - half as f64 / 2.0).abs() / expected < 1e-12);
    }

    #[test]
    fn test_as_array_order() {
        let metrics = MetricTriple {
            avg_response: 1.0,
            avg_waiting: 2.0,
            avg_turnaround: 3.0,
        };
        assert_eq!(metrics.as_array(), [1.0, 2.0, 3.0]);
    }
}
