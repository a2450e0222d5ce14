//! Simulation driver: every discipline over one process set.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{compute_metrics, Discipline, MetricTriple};
use crate::error::Result;
use crate::models::{ProcessSet, Schedule};

/// Runs FIFO, SJF, SRT and Round Robin (in that order) and returns their
/// metrics in the same order.
///
/// # Errors
/// [`SimulationError::EmptyInput`](crate::error::SimulationError::EmptyInput)
/// for an empty set. No partial results are returned.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessSet;
/// use u_cpusched::scheduler::run_all;
///
/// let set = ProcessSet::new(2, vec![(0, 4)]).unwrap();
/// let [fifo, sjf, srt, rr] = run_all(&set).unwrap();
/// assert_eq!(fifo, sjf);
/// assert_eq!(srt, rr);
/// assert_eq!(rr.avg_turnaround, 4.0);
/// ```
#[instrument(level = "debug", skip(set), fields(processes = set.len(), quantum = set.quantum()))]
pub fn run_all(set: &ProcessSet) -> Result<[MetricTriple; 4]> {
    Ok([
        run_discipline(set, Discipline::Fifo)?,
        run_discipline(set, Discipline::Sjf)?,
        run_discipline(set, Discipline::Srt)?,
        run_discipline(set, Discipline::RoundRobin)?,
    ])
}

/// Builds one discipline's schedule and computes its metrics.
pub fn run_discipline(set: &ProcessSet, discipline: Discipline) -> Result<MetricTriple> {
    let schedule = discipline.build(set);
    let metrics = compute_metrics(set, &schedule)?;
    debug!(
        discipline = discipline.as_str(),
        avg_response = metrics.avg_response,
        avg_waiting = metrics.avg_waiting,
        avg_turnaround = metrics.avg_turnaround,
        "discipline simulated"
    );
    Ok(metrics)
}

/// Full outcome for one discipline: the schedule and its metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineReport {
    pub discipline: Discipline,
    pub schedule: Schedule,
    pub metrics: MetricTriple,
}

/// Like [`run_all`], but keeps each schedule alongside its metrics.
pub fn simulate(set: &ProcessSet) -> Result<Vec<DisciplineReport>> {
    Discipline::ALL
        .into_iter()
        .map(|discipline| -> Result<DisciplineReport> {
            let schedule = discipline.build(set);
            let metrics = compute_metrics(set, &schedule)?;
            Ok(DisciplineReport {
                discipline,
                schedule,
                metrics,
            })
        })
        .collect()
}
