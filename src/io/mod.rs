//! Text I/O around the simulation core.
//!
//! - **`reader`**: process files (quantum line, then `arrival duration`)
//! - **`writer`**: result lines with three decimals and a decimal comma
//! - **`batch`**: numbered input files in one directory

mod batch;
mod reader;
mod writer;

pub use batch::{process_file, run_batch, BatchFailure, BatchSummary};
pub use reader::{parse_process_set, read_process_file};
pub use writer::{format_results, format_value, write_results};
