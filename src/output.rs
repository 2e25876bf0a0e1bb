//! Column-aligned terminal output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const PADDING: usize = 2;

/// Writes rows with every column padded to its widest cell plus two spaces.
pub(crate) fn write_table<W: Write>(w: &mut W, rows: &[Vec<String>]) -> io::Result<()> {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            let pad = widths[i] - cell.chars().count() + PADDING;
            line.extend(std::iter::repeat_n(' ', pad));
        }
        writeln!(w, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Header row, a row of dashes under it, then the data rows.
pub(crate) fn print_table(headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
    let mut all = Vec::with_capacity(rows.len() + 2);
    all.push(headers.iter().map(|h| h.to_string()).collect::<Vec<_>>());
    all.push(underline(headers));
    all.extend(rows);
    let stdout = io::stdout();
    write_table(&mut stdout.lock(), &all).context("write table")
}

pub(crate) fn print_fields(fields: &[(&str, String)]) -> Result<()> {
    let rows = fields
        .iter()
        .map(|(label, value)| vec![label.to_string(), value.clone()])
        .collect::<Vec<_>>();
    let stdout = io::stdout();
    write_table(&mut stdout.lock(), &rows).context("write fields")
}

pub(crate) fn underline(headers: &[&str]) -> Vec<String> {
    headers
        .iter()
        .map(|h| "-".repeat(h.chars().count()))
        .collect()
}

pub(crate) fn timestamp(t: OffsetDateTime) -> String {
    t.format(&Rfc3339).unwrap_or_else(|_| t.to_string())
}

pub(crate) fn unix_timestamp(secs: i64) -> String {
    match OffsetDateTime::from_unix_timestamp(secs) {
        Ok(t) => timestamp(t),
        Err(_) => secs.to_string(),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T, label: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", label))?
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;
