//! Excel workbook reader. Only the first sheet is read; the header row is
//! the first row of that sheet.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::dataset::{Cell, Dataset, DatasetError};

pub fn read_excel(path: &Path) -> Result<Dataset, DatasetError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DatasetError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header_row| header_row.iter().map(header_text).collect())
        .unwrap_or_default();

    let data_rows: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(Dataset::new(headers, data_rows))
}

fn header_text(value: &Data) -> String {
    match value {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn convert_cell(value: &Data) -> Cell {
    match value {
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => Cell::DateTime(naive),
            None => Cell::Empty,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}
