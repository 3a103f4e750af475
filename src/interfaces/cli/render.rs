// ============================================================
// OUTPUT RENDERING
// ============================================================
// Plain-text presentation of every tool's results

use std::io::{self, Write};

use crate::domain::csv::{format_list, CsvRow, CsvSummary, CsvTable};
use crate::domain::summation::{EvenSum, NumberSum};

pub const RULE_WIDTH: usize = 50;
pub const BANNER_WIDTH: usize = 60;

pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Shortest round-trip form with a signed, two-digit exponent outside
/// `1e-4..1e16`, matching Python's float `repr`.
pub fn float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let sci = format!("{:e}", value);
    match sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)))
    {
        Some((mantissa, exp)) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => sci,
    }
}

pub fn number_sum(out: &mut dyn Write, sum: &NumberSum) -> io::Result<()> {
    for (idx, value) in sum.values.iter().enumerate() {
        writeln!(out, "Number {}: {}", idx + 1, float(*value))?;
    }
    writeln!(out, "Sum: {}", float(sum.total))?;
    writeln!(out)?;
    writeln!(out, "The sum of the three numbers is: {}", float(sum.total))
}

pub fn even_sum(out: &mut dyn Write, sum: &EvenSum) -> io::Result<()> {
    for hit in &sum.hits {
        writeln!(out, "Row {}: Found even number {}", hit.row, hit.value)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))?;
    writeln!(out, "Total sum of even numbers in even rows: {}", sum.total)?;
    writeln!(out, "{}", rule('=', RULE_WIDTH))
}

/// `Headers: a, b`, ruled block of rows, row count
pub fn table_rows(out: &mut dyn Write, table: &CsvTable, json: bool) -> io::Result<()> {
    writeln!(out, "Headers: {}", table.headers.join(", "))?;
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    if json {
        for row in &table.rows {
            writeln!(out, "{}", serde_json::json!(row))?;
        }
    } else {
        for row in &table.rows {
            writeln!(out, "{}", format_list(row))?;
        }
    }
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    writeln!(out, "Total rows read: {}", table.row_count())
}

pub fn dict_rows(out: &mut dyn Write, rows: &[CsvRow], json: bool) -> io::Result<()> {
    for row in rows {
        if json {
            writeln!(out, "{}", row.to_json())?;
        } else {
            writeln!(out, "{}", row.format_mapping())?;
        }
    }
    writeln!(out, "{}", rule('-', RULE_WIDTH))?;
    writeln!(out, "Total rows read: {}", rows.len())
}

/// Aligned preview of the leading rows, prefixed by their index
pub fn head(summary: &CsvSummary) -> String {
    let names: Vec<&str> = summary.columns.iter().map(|c| c.name.as_str()).collect();
    let index_width = summary.head.len().saturating_sub(1).to_string().len();

    let widths: Vec<usize> = names
        .iter()
        .enumerate()
        .map(|(col, name)| {
            summary
                .head
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(summary.head.len() + 1);
    let header: Vec<String> = names
        .iter()
        .zip(&widths)
        .map(|(name, width)| format!("{:>width$}", name, width = *width))
        .collect();
    lines.push(format!("{:index_width$}  {}", "", header.join("  ")));

    for (idx, row) in summary.head.iter().enumerate() {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                format!("{:>width$}", cell, width = *width)
            })
            .collect();
        lines.push(format!("{:<index_width$}  {}", idx, cells.join("  ")));
    }

    lines.join("\n")
}

pub fn summary(out: &mut dyn Write, summary: &CsvSummary) -> io::Result<()> {
    writeln!(out, "Column info:")?;
    writeln!(out, "{}", summary.column_info())?;
    writeln!(out)?;
    writeln!(out, "First few rows:")?;
    writeln!(out, "{}", head(summary))?;
    writeln!(out)?;
    writeln!(
        out,
        "Shape: ({}, {}) (rows, columns)",
        summary.shape.0, summary.shape.1
    )
}
