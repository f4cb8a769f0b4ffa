use std::fmt::Write;

use crate::planning::types::ResultTable;

const COLUMNS: [&str; 6] = ["metric", "mde", "control", "per treatment", "total", "days"];

/// Renders `table` as aligned plain text, MDE as a percentage and counts
/// with thousands separators
pub fn format_table(table: &ResultTable) -> String {
    let cells: Vec<[String; 6]> = table
        .iter()
        .map(|row| {
            [
                row.metric_name.clone(),
                format!("{:.2}%", row.mde * 100.),
                group_thousands(row.control_sample_size),
                group_thousands(row.treatment_sample_size),
                group_thousands(row.total_sample_size),
                row.experiment_days
                    .map(group_thousands)
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS.map(String::from), &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

// Metric name left-aligned, numbers right-aligned
fn push_line(out: &mut String, line: &[String; 6], widths: &[usize; 6]) {
    let _ = write!(out, "{:<w$}", line[0], w = widths[0]);
    for (cell, &w) in line.iter().zip(widths.iter()).skip(1) {
        let _ = write!(out, "  {cell:>w$}");
    }
    out.push('\n');
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
