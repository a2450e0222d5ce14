//! Batch driver over a directory of numbered process files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use super::{read_process_file, write_results};
use crate::config::BatchConfig;
use crate::error::InputError;
use crate::scheduler::{run_all, MetricTriple};

/// A file the batch could not process.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Result files written.
    pub written: Vec<PathBuf>,
    /// Inputs that failed, with the reason.
    pub failed: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Whether every input was processed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Simulates one input file and writes its results to `output`.
pub fn process_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<[MetricTriple; 4], InputError> {
    let set = read_process_file(input)?;
    let results = run_all(&set)?;
    write_results(output, &results)?;
    Ok(results)
}

/// Processes files `01..=count` from the configured directory.
///
/// A failing file is logged and recorded; the batch moves on.
///
/// # Errors
/// [`InputError::Io`] if the input directory cannot be read.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary, InputError> {
    if !config.dir().is_dir() {
        return Err(InputError::io(
            config.dir(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "input directory not found"),
        ));
    }

    let mut summary = BatchSummary::default();
    for n in 1..=config.count {
        let input = config.input_path(n);
        let output = config.output_path(n);

        match process_file(&input, &output) {
            Ok(_) => {
                info!(input = %input.display(), output = %output.display(), "results written");
                summary.written.push(output);
            }
            Err(e) => {
                warn!(input = %input.display(), error = %e, "skipping input");
                summary.failed.push(BatchFailure {
                    path: input,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        written = summary.written.len(),
        failed = summary.failed.len(),
        "batch finished"
    );
    Ok(summary)
}
