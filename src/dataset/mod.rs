//! Tabular-data container and file readers.
//!
//! The engine only ever sees a [`Dataset`]: owned headers plus rows of
//! loosely typed [`Cell`]s. Where the values came from (CSV text, Excel
//! cells) is this module's problem, not the engine's.

mod csv;
mod excel;

use std::path::Path;

use chrono::NaiveDateTime;
use thiserror::Error;

pub use self::csv::read_csv;
pub use self::excel::read_excel;

/// One loosely typed dataset value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Bool(bool),
    Empty,
}

const EMPTY: Cell = Cell::Empty;

/// An in-memory table: header row plus data rows. Rows may be ragged;
/// missing trailing cells read as [`Cell::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Dataset { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell<'a>(&self, row: &'a [Cell], index: usize) -> &'a Cell {
        row.get(index).unwrap_or(&EMPTY)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Errors while loading an export file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding failed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] ::csv::Error),

    /// Spreadsheet decoding failed.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// The workbook contains no sheets.
    #[error("Workbook has no sheets")]
    EmptyWorkbook,

    /// The file extension maps to no supported reader.
    #[error("Unsupported file format: {0} (expected .csv, .xlsx or .xls)")]
    UnsupportedFormat(String),
}

/// Read an export file, dispatching on its extension: `.csv` as delimited
/// text, `.xlsx`/`.xlsm`/`.xls` as a workbook (first sheet only).
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xlsm" | "xls" => read_excel(path),
        _ => Err(DatasetError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows_read_as_empty() {
        let data = Dataset::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec![Cell::Text("x".to_string())]],
        );
        let row = &data.rows()[0];
        assert_eq!(data.cell(row, 0), &Cell::Text("x".to_string()));
        assert_eq!(data.cell(row, 1), &Cell::Empty);
        assert_eq!(data.cell(row, 99), &Cell::Empty);
    }

    #[test]
    fn test_read_table_rejects_unknown_extensions() {
        let err = read_table("export.pdf").unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(_)));
    }
}
