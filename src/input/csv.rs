use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{FirError, Result};

/// Read one sample per record from a CSV or plain text file
pub fn load_csv_samples<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let file = File::open(path.as_ref())?;
    parse_csv_samples(BufReader::new(file))
}

/// Parse one sample per line, keeping record order
///
/// Only the first comma-separated field of each line is used. Blank lines and
/// lines starting with `#` are skipped.
///
/// # Errors
/// Returns `FirError::Parse` with the 1-based line number of the first value
/// that is not a number
pub fn parse_csv_samples<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let field = trimmed.split(',').next().unwrap_or(trimmed).trim();
        let value = field.parse::<f64>().map_err(|_| FirError::Parse {
            line: idx + 1,
            value: field.to_string(),
        })?;
        samples.push(value);
    }

    Ok(samples)
}
