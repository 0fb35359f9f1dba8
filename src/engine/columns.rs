//! Schema-flexible column resolution.
//!
//! Exports name their columns inconsistently (`Key`, `KEY`, `key`), so the
//! four required logical columns are matched case-insensitively up front,
//! producing a typed index map before any business logic runs.

use crate::engine::error::MetricsError;

/// The four logical columns every export must provide, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["key", "date of change", "status", "status [new]"];

/// Resolved header indices for the required logical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub key: usize,
    pub changed_at: usize,
    pub status_before: usize,
    pub status_after: usize,
}

/// Match headers case-insensitively against the required logical names.
/// Fails listing every missing logical column; extra columns are ignored.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap, MetricsError> {
    let find = |logical: &str| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(logical))
    };

    let resolved: Vec<Option<usize>> = REQUIRED_COLUMNS.iter().map(|name| find(name)).collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip(&resolved)
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(MetricsError::MissingColumns(missing));
    }

    Ok(ColumnMap {
        key: resolved[0].unwrap(),
        changed_at: resolved[1].unwrap(),
        status_before: resolved[2].unwrap(),
        status_after: resolved[3].unwrap(),
    })
}
