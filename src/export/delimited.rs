//! Delimited text export of result tables.
//!
//! Columns: `metric, mde, control_sample_size, treatment_sample_size,
//! total_sample_size, experiment_days`. The MDE is written as a raw float,
//! and `experiment_days` is left empty when no traffic model was given.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::AbcomputeErr;
use crate::planning::types::ResultTable;

pub const HEADER: [&str; 6] = [
    "metric",
    "mde",
    "control_sample_size",
    "treatment_sample_size",
    "total_sample_size",
    "experiment_days",
];

/// Writes `table` to `writer`, one line per row, fields separated by
/// `delimiter`
pub fn write_delimited<W: Write>(
    table: &ResultTable,
    mut writer: W,
    delimiter: char,
) -> Result<(), AbcomputeErr> {
    let sep = delimiter.to_string();
    writeln!(writer, "{}", HEADER.join(sep.as_str())).map_err(AbcomputeErr::Export)?;
    for row in table {
        let days = row
            .experiment_days
            .map(|d| d.to_string())
            .unwrap_or_default();
        writeln!(
            writer,
            "{}",
            [
                quote_field(&row.metric_name, delimiter),
                row.mde.to_string(),
                row.control_sample_size.to_string(),
                row.treatment_sample_size.to_string(),
                row.total_sample_size.to_string(),
                days,
            ]
            .join(sep.as_str())
        )
        .map_err(AbcomputeErr::Export)?;
    }
    writer.flush().map_err(AbcomputeErr::Export)
}

/// Writes `table` as a comma-separated file at `path`
pub fn export_csv(table: &ResultTable, path: &Path) -> Result<(), AbcomputeErr> {
    let file = File::create(path).map_err(AbcomputeErr::Export)?;
    write_delimited(table, BufWriter::new(file), ',')?;
    tracing::info!(path = %path.display(), rows = table.len(), "exported results");
    Ok(())
}

fn quote_field(field: &str, delimiter: char) -> String {
    if field.contains([delimiter, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
