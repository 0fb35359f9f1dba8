//! The metrics engine: everything between a loaded [`Dataset`](crate::dataset::Dataset)
//! and a computed [`MetricsReport`].
//!
//! Single-pass batch computation, no shared state, no IO. The only hard
//! failure is missing required columns; per-row parse problems degrade to
//! silent row discard.

pub mod columns;
pub mod compute;
pub mod error;
pub mod status;
pub mod timestamp;
pub mod types;

pub use columns::{resolve_columns, ColumnMap, REQUIRED_COLUMNS};
pub use compute::{compute_metrics, parse_timezone, today_in};
pub use error::MetricsError;
pub use status::{normalize_status, AliasSet};
pub use timestamp::parse_timestamp;
pub use types::{MetricResult, MetricType, MetricsReport, TransitionRecord};
