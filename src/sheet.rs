//! Generic reader for the spreadsheet exports the state agencies publish.
//!
//! Each export is one CSV sheet. Some carry banner/title rows ahead of the
//! header row, some carry header cells with embedded line breaks, and the
//! exact header text drifts between export vintages. This module absorbs
//! all of that: callers skip a fixed number of leading rows, then resolve
//! each field through an ordered list of candidate header names.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

/// One parsed sheet: normalized header cells plus the data rows below them.
#[derive(Debug)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

/// Collapses internal whitespace runs (including line breaks inside a
/// quoted header cell) to single spaces and trims.
fn collapse_ws(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

impl Sheet {
    /// Reads a sheet from `path`, treating the row after `banner_rows`
    /// skipped leading rows as the header row. Fully blank lines are not
    /// counted; the CSV parser drops them before they reach us.
    pub fn from_path(path: &Path, banner_rows: usize) -> Result<Sheet> {
        let file =
            File::open(path).with_context(|| format!("open sheet {}", path.display()))?;
        Self::from_reader(file, banner_rows)
            .with_context(|| format!("read sheet {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R, banner_rows: usize) -> Result<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();
        for _ in 0..banner_rows {
            match records.next() {
                Some(record) => {
                    record.context("read banner row")?;
                }
                None => {
                    return Ok(Sheet { headers: Vec::new(), rows: Vec::new() });
                }
            }
        }

        let headers = match records.next() {
            Some(record) => record
                .context("read header row")?
                .iter()
                .map(collapse_ws)
                .collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for record in records {
            rows.push(record.context("read data row")?);
        }
        Ok(Sheet { headers, rows })
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index of the first candidate present in the header row.
    /// Comparison is whitespace-collapsed and case-insensitive.
    pub fn column(&self, candidate: &str) -> Option<usize> {
        let wanted = collapse_ws(candidate);
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(&wanted))
    }

    /// Resolves a field for `row` by trying `candidates` in order and
    /// taking the first non-empty cell. Falls back to the empty string
    /// when no candidate column exists or all are blank.
    pub fn field(&self, row: &StringRecord, candidates: &[&str]) -> String {
        for candidate in candidates {
            if let Some(index) = self.column(candidate)
                && let Some(value) = row.get(index)
                && !value.is_empty()
            {
                return value.to_string();
            }
        }
        String::new()
    }
}
