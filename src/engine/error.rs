//! Engine error types.

use thiserror::Error;

use crate::dataset::DatasetError;

/// Errors that abort a metrics computation. Per-row problems (blank keys,
/// unparseable timestamps) are not errors; those rows are dropped.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// One or more of the four required logical columns has no
    /// case-insensitive match in the dataset headers.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The configured timezone is not a known IANA identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The input file could not be read or decoded.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
