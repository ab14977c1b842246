use crate::errors::{AppError, AppResult};
use crate::import::detect::{Delimiter, decode_content};
use crate::models::RawRow;
use crate::models::raw_row::REQUIRED_COLUMNS;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs;
use std::path::Path;

/// Read a timesheet export from disk.
pub fn read_timesheet(path: &Path, delimiter: Delimiter) -> AppResult<Vec<RawRow>> {
    let bytes = fs::read(path)?;
    read_timesheet_bytes(&bytes, delimiter)
}

/// Read a timesheet export from raw bytes.
///
/// Required columns are checked before any row is parsed; extra columns
/// are ignored. Each row remembers the line it started on.
pub fn read_timesheet_bytes(bytes: &[u8], delimiter: Delimiter) -> AppResult<Vec<RawRow>> {
    let content = decode_content(bytes);
    let sep = delimiter.resolve(&content);

    let mut rdr = ReaderBuilder::new()
        .delimiter(sep)
        .has_headers(true)
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = rdr.headers()?.clone();
    check_columns(&headers)?;

    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let mut row: RawRow = record.deserialize(Some(&headers))?;
        row.line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        rows.push(row);
    }

    Ok(rows)
}

fn check_columns(headers: &StringRecord) -> AppResult<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingColumns(missing))
    }
}
