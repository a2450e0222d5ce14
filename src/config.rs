//! Batch run configuration.
//!
//! Input files follow the `<prefix>-<NN>.txt` convention (two-digit,
//! 1-based) and results are written next to them as
//! `<prefix>-<NN><suffix>.txt`.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the batch input directory.
pub const INPUT_DIR_ENV: &str = "SCHEDSIM_INPUT_DIR";
/// Environment variable overriding the number of batch files.
pub const BATCH_COUNT_ENV: &str = "SCHEDSIM_BATCH_COUNT";

/// Where batch inputs live and how they are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory holding inputs; results are written here too.
    pub input_dir: PathBuf,
    /// File name prefix.
    pub prefix: String,
    /// Number of files, numbered `01..=count`.
    pub count: u32,
    /// Appended to the input stem to name the result file.
    pub result_suffix: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            prefix: "TESTE".to_string(),
            count: 10,
            result_suffix: "-RESULTADO".to_string(),
        }
    }
}

impl BatchConfig {
    /// Creates a configuration for `input_dir` with default naming.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `SCHEDSIM_INPUT_DIR` and
    /// `SCHEDSIM_BATCH_COUNT` when set. An unparsable count is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var(INPUT_DIR_ENV) {
            config.input_dir = PathBuf::from(dir);
        }
        if let Some(count) = env::var(BATCH_COUNT_ENV).ok().and_then(|v| v.parse().ok()) {
            config.count = count;
        }
        config
    }

    /// Sets the input directory.
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Sets the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the number of files.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the result file suffix.
    pub fn with_result_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.result_suffix = suffix.into();
        self
    }

    /// Path of input file number `n` (1-based).
    pub fn input_path(&self, n: u32) -> PathBuf {
        self.file(n, "")
    }

    /// Path of result file number `n` (1-based).
    pub fn output_path(&self, n: u32) -> PathBuf {
        self.file(n, &self.result_suffix)
    }

    /// Input directory.
    pub fn dir(&self) -> &Path {
        &self.input_dir
    }

    fn file(&self, n: u32, suffix: &str) -> PathBuf {
        self.input_dir
            .join(format!("{}-{n:02}{suffix}.txt", self.prefix))
    }
}
