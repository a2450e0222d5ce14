//! Input validation for process sets.
//!
//! Checks structural integrity of the raw input before any timeline is
//! built. Detects:
//! - Non-positive Round Robin quantum
//! - Negative arrival times
//! - Non-positive service durations
//! - A time horizon (latest arrival plus total work) beyond `i64`
//!
//! Every problem is collected so a caller can report them all at once;
//! [`ProcessSet::new`](crate::models::ProcessSet::new) surfaces the first.

use crate::error::SimulationError;

/// Validation result.
pub type ValidationResult = Result<(), Vec<SimulationError>>;

/// Validates a quantum and a list of `(arrival, duration)` pairs.
///
/// Checks:
/// 1. `quantum > 0`
/// 2. `arrival >= 0` for every process
/// 3. `duration > 0` for every process
/// 4. `max(arrival) + sum(duration)` fits in an `i64`
///
/// Every schedule finishes by that horizon, so check 4 bounds every clock
/// value a builder can reach. It only runs once checks 2 and 3 pass.
///
/// An empty process list is structurally valid; it is rejected later by
/// the metrics step, where the average would be undefined.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues in
/// input order (quantum first).
pub fn validate_input(quantum: i64, processes: &[(i64, i64)]) -> ValidationResult {
    let mut errors = Vec::new();

    if quantum <= 0 {
        errors.push(SimulationError::InvalidQuantum { quantum });
    }

    let mut defective = false;
    for (index, &(arrival, duration)) in processes.iter().enumerate() {
        if let Some(reason) = process_defect(arrival, duration) {
            defective = true;
            errors.push(SimulationError::InvalidProcess {
                index,
                arrival,
                duration,
                reason,
            });
        }
    }

    if !defective {
        if let Err(err) = check_horizon(processes) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_horizon(processes: &[(i64, i64)]) -> Result<(), SimulationError> {
    let max_arrival = processes.iter().map(|&(a, _)| a).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(max_arrival, |horizon, &(_, d)| horizon.checked_add(d))
        .map(|_| ())
        .ok_or(SimulationError::HorizonOverflow { max_arrival })
}

fn process_defect(arrival: i64, duration: i64) -> Option<&'static str> {
    if arrival < 0 {
        Some("arrival must be non-negative")
    } else if duration <= 0 {
        Some("duration must be positive")
    } else {
        None
    }
}
