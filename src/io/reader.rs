//! Process-file reader.
//!
//! # Format
//!
//! ```text
//! 2        <- quantum
//! 0 5      <- arrival duration
//! 0 3
//! ```
//!
//! Blank lines are ignored. Fields are separated by any whitespace.

use std::fs;
use std::path::Path;

use crate::error::InputError;
use crate::models::ProcessSet;

/// Parses a process set from text.
///
/// # Errors
/// - [`InputError::MissingQuantum`] if there is no non-blank line.
/// - [`InputError::Malformed`] for unparsable numbers or a wrong field
///   count (1-based line numbers).
/// - [`InputError::Simulation`] if the values fail validation.
pub fn parse_process_set(text: &str) -> Result<ProcessSet, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (quantum_line, quantum_text) = lines.next().ok_or(InputError::MissingQuantum)?;
    let quantum = parse_int(quantum_line, quantum_text, "quantum")?;

    let mut processes = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [arrival, duration] = fields.as_slice() else {
            return Err(InputError::malformed(
                line_no,
                format!("expected 'arrival duration', found {} field(s)", fields.len()),
            ));
        };
        processes.push((
            parse_int(line_no, arrival, "arrival")?,
            parse_int(line_no, duration, "duration")?,
        ));
    }

    Ok(ProcessSet::new(quantum, processes)?)
}

/// Reads and parses a process file.
pub fn read_process_file(path: impl AsRef<Path>) -> Result<ProcessSet, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    parse_process_set(&text)
}

fn parse_int(line: usize, text: &str, what: &str) -> Result<i64, InputError> {
    text.parse()
        .map_err(|_| InputError::malformed(line, format!("invalid {what} '{text}'")))
}
