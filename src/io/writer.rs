//! Result writer.
//!
//! One line per discipline (FIFO, SJF, SRT, RR), each holding average
//! response, waiting and turnaround time with three decimals and a
//! decimal comma:
//!
//! ```text
//! 2,500 2,500 6,500
//! ```

use std::fs;
use std::path::Path;

use crate::error::InputError;
use crate::scheduler::MetricTriple;

/// Formats one value with three decimals and a decimal comma.
pub fn format_value(value: f64) -> String {
    format!("{value:.3}").replace('.', ",")
}

/// Formats metric triples, one newline-terminated line each.
pub fn format_results(results: &[MetricTriple]) -> String {
    let mut out = String::new();
    for triple in results {
        let line: Vec<String> = triple.as_array().into_iter().map(format_value).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Writes formatted results to `path`, replacing any existing file.
pub fn write_results(path: impl AsRef<Path>, results: &[MetricTriple]) -> Result<(), InputError> {
    let path = path.as_ref();
    fs::write(path, format_results(results)).map_err(|e| InputError::io(path, e))
}
