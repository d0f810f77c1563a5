//! Plain text tables.

use std::io::{self, Write};

use crate::availability::datacenter::to_full_names_or_codes;
use crate::engine::{CheckReport, Report};

/// Spaces between two columns, on top of the widest cell.
const COLUMN_GAP: usize = 4;

/// Header, dashed underline, then left-aligned rows.
///
/// Every column but the last is padded to its widest cell plus `COLUMN_GAP`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row; missing cells render empty, extra cells are dropped.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        write_line(out, &self.headers, &widths)?;
        write_line(out, &underline, &widths)?;
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}", cell, width = widths[i] + COLUMN_GAP));
        }
    }
    writeln!(out, "{}", line)
}

/// `list` table: one row per plan.
///
/// With `human`, datacenter codes are replaced by their full names.
pub fn report_table(report: &Report, human: bool) -> Table {
    let mut table = Table::new(["planCode", "category", "name", "price", "status", "datacenters"]);
    for row in &report.rows {
        let datacenters = if human {
            to_full_names_or_codes(&row.datacenters)
        } else {
            row.datacenters.clone()
        };
        table.push_row(vec![
            row.plan_code.clone(),
            row.category_display.clone(),
            row.invoice_name.clone(),
            format!("{:.2} {}", row.price, row.currency),
            row.status.to_string(),
            datacenters.join(", "),
        ]);
    }
    table
}

/// `check` table: one row per datacenter, one column per sub-status.
pub fn check_table(report: &CheckReport) -> Table {
    let sub_statuses = report.sub_status_names();
    let headers = ["planCode", "datacenter", "status"]
        .into_iter()
        .map(str::to_string)
        .chain(sub_statuses.iter().cloned());
    let mut table = Table::new(headers);

    for record in &report.records {
        let mut row = vec![
            report.plan_code.clone(),
            record.datacenter.clone(),
            record.status.clone(),
        ];
        row.extend(
            sub_statuses
                .iter()
                .map(|name| record.sub_status(name).unwrap_or_default().to_string()),
        );
        table.push_row(row);
    }
    table
}
