//! CSV reading and writing for the catalog file (`title,box,cover`).

use std::fmt;
use std::io::{Read, Write};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::models::{format_cover, parse_cover, ManualRecord};

pub const HEADER: [&str; 3] = ["title", "box", "cover"];

/// Raw row as it appears on disk. Every column is optional so short rows and
/// empty cells reach validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    title: Option<String>,
    #[serde(rename = "box")]
    box_label: Option<String>,
    cover: Option<String>,
}

/// A catalog row that was skipped during load.
///
/// `raw` holds the row exactly as read (untrimmed) so it can be written back
/// on the next rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct RowWarning {
    pub line: usize,
    pub message: String,
    pub raw: csv::ByteRecord,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Read every valid record from CSV data.
///
/// Rows that cannot be turned into a [`ManualRecord`] are skipped and
/// reported as [`RowWarning`]s. Completely empty input is an empty catalog;
/// a header without a `title` column is an error, and so is a read failure.
pub fn read_catalog<R: Read>(reader: R) -> Result<(Vec<ManualRecord>, Vec<RowWarning>)> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut headers = rdr.byte_headers()?.clone();
    headers.trim();
    if headers.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }
    if !headers.iter().any(|h| h == b"title") {
        return Err(CatalogError::MissingTitleColumn);
    }

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (index, result) in rdr.byte_records().enumerate() {
        let line_num = index + 2; // +2 because CSV is 1-indexed and has header
        let raw = result?;

        match parse_row(&raw, &headers) {
            Ok(record) => records.push(record),
            Err(e) => {
                let warning = RowWarning {
                    line: line_num,
                    message: e.to_string(),
                    raw,
                };
                warn!("Skipping catalog row: {warning}");
                warnings.push(warning);
            }
        }
    }

    debug!(
        "Read {} catalog records ({} skipped)",
        records.len(),
        warnings.len()
    );
    Ok((records, warnings))
}

fn parse_row(raw: &csv::ByteRecord, headers: &csv::ByteRecord) -> Result<ManualRecord> {
    let mut trimmed = raw.clone();
    trimmed.trim();

    let row: CatalogRow = trimmed.deserialize(Some(headers))?;
    let cover = parse_cover(row.cover.as_deref().unwrap_or(""))?;
    ManualRecord::new(
        row.title.as_deref().unwrap_or(""),
        row.box_label.as_deref().unwrap_or(""),
        cover,
    )
}

/// Write the header and every record, with cover in its canonical spelling
pub fn write_catalog<W: Write>(writer: W, records: &[ManualRecord]) -> Result<()> {
    write_catalog_with_skipped(writer, records, &[])
}

/// Like [`write_catalog`], then append `skipped` rows unchanged.
///
/// Skipped rows may have any number of fields.
pub fn write_catalog_with_skipped<W: Write>(
    writer: W,
    records: &[ManualRecord],
    skipped: &[csv::ByteRecord],
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.write_record([
            record.title(),
            record.box_label(),
            format_cover(record.cover()),
        ])?;
    }
    for raw in skipped {
        wtr.write_byte_record(raw)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
