//! Batch input file access and line filtering.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error_handling::InputError;

/// Checks that a batch input path exists and is not a directory.
///
/// Called before any resolution is attempted; a failure here aborts the run.
pub fn check_input_file(path: &Path) -> Result<(), InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(InputError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Reads the batch file, returning its lines in file order.
pub fn read_lines(path: &Path) -> Result<Vec<String>, InputError> {
    info!("reading: {}", path.display());
    let file = File::open(path)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()?;
    info!("Read {} lines", lines.len());
    Ok(lines)
}

/// Should this batch line be skipped.
///
/// Comment lines start with `#`; a leading space also marks a line as
/// skipped. Blank lines carry nothing to resolve. Lines are not trimmed --
/// the leading-space rule depends on it.
pub fn should_skip(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with(' ')
}
