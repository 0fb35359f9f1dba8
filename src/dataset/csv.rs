//! CSV reader. Every value stays text; the engine's timestamp parser
//! handles interpretation.

use std::path::Path;

use crate::dataset::{Cell, Dataset, DatasetError};

pub fn read_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .trim(::csv::Trim::None)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|value| {
                if value.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(value.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}
