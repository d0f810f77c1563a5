//! JSON Lines output.
//!
//! One JSON object per report row, for `jq` and polling scripts.

use std::io::Write;

use std::borrow::Cow;

use anyhow::{Context, Result};

use crate::availability::datacenter::to_full_names_or_codes;
use crate::engine::{DisplayRow, Report};

/// Writes one line per row and returns the number of lines written.
///
/// With `human`, datacenter codes are replaced by their full names.
pub fn write_jsonl<W: Write>(report: &Report, human: bool, out: &mut W) -> Result<usize> {
    for row in &report.rows {
        let row: Cow<'_, DisplayRow> = if human {
            Cow::Owned(DisplayRow {
                datacenters: to_full_names_or_codes(&row.datacenters),
                ..row.clone()
            })
        } else {
            Cow::Borrowed(row)
        };
        let line = serde_json::to_string(&*row).context("Failed to encode JSONL row")?;
        writeln!(out, "{}", line).context("Failed to write JSONL row")?;
    }
    Ok(report.rows.len())
}
