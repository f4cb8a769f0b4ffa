//! Reading raw observations from delimited text files.
//!
//! Only the first column is used. Rows whose first field is not a finite
//! number (blank cells, text, `NaN`) are dropped, so exported tables with
//! stray footer rows can be used as they are.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AbcomputeErr;
use crate::observations::error::ObservationLoadErr;

/// Loads the first column of a comma- or tab-delimited file as numbers.
///
/// # Arguments
/// * `path` - Path to the file
/// * `has_header` - Whether the first line is a header (skip it)
///
/// # Errors
/// Fails if the file cannot be read or holds no numeric value at all.
pub fn load_first_numeric_column(
    path: &Path,
    has_header: bool,
) -> Result<Vec<f64>, AbcomputeErr> {
    let io_err = |source: std::io::Error| -> AbcomputeErr {
        ObservationLoadErr::Io {
            path: path.to_path_buf(),
            source,
        }
        .into()
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    let mut dropped = 0usize;
    for line in reader.lines().skip(usize::from(has_header)) {
        let line = line.map_err(io_err)?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_first_field(&line) {
            Some(value) => values.push(value),
            None => dropped += 1,
        }
    }

    tracing::debug!(
        path = %path.display(),
        kept = values.len(),
        dropped,
        "loaded observations"
    );

    if values.is_empty() {
        return Err(ObservationLoadErr::NoNumericValues(path.to_path_buf()).into());
    }
    Ok(values)
}

fn parse_first_field(line: &str) -> Option<f64> {
    let field = line.split([',', '\t']).next()?;
    let value: f64 = field.trim().trim_matches('"').trim().parse().ok()?;
    value.is_finite().then_some(value)
}
