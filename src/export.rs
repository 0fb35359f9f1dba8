//! Results workbook export.
//!
//! Mirrors the on-screen table: `Key, In Progress Date, Done Date, Days,
//! Metric Type`, one worksheet, dates as real date cells.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

use crate::engine::MetricsReport;

pub const RESULT_HEADERS: [&str; 5] =
    ["Key", "In Progress Date", "Done Date", "Days", "Metric Type"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Write the computed results to an `.xlsx` workbook.
pub fn write_results_workbook<P: AsRef<Path>>(
    path: P,
    report: &MetricsReport,
) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Results")?;

    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    for (col, header) in RESULT_HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, result) in report.results.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write(row, 0, &result.key)?;
        if let Some(date) = result.first_in_progress_date {
            worksheet.write_datetime_with_format(row, 1, date, &date_format)?;
        }
        if let Some(date) = result.first_done_date {
            worksheet.write_datetime_with_format(row, 2, date, &date_format)?;
        }
        if let Some(days) = result.days {
            worksheet.write(row, 3, days)?;
        }
        if let Some(metric_type) = result.metric_type {
            worksheet.write(row, 4, metric_type.to_string())?;
        }
    }

    worksheet.autofit();
    workbook.save(path.as_ref())?;
    Ok(())
}
