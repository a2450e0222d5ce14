//! CPU scheduling domain models.
//!
//! Provides the input and output data types of the simulator: the
//! validated process set consumed by every discipline and the schedule
//! each discipline produces.
//!
//! | Type | Role |
//! |------|------|
//! | Process | `(arrival, duration)` pair, identified by input position |
//! | ProcessSet | Immutable processes + Round Robin quantum |
//! | Slice | One contiguous grant of CPU time |
//! | Schedule | Per-process start/finish plus the slices behind them |

mod process;
mod schedule;

pub use process::{Process, ProcessSet};
pub use schedule::{Schedule, Slice};
