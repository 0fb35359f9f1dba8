// FlowMetrics Library - Cycle Time & Work Item Age computation
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod export;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{config, init_config, FlowMetricsConfig};
pub use dataset::{read_table, Cell, Dataset, DatasetError};
pub use engine::{
    compute_metrics, normalize_status, parse_timestamp, parse_timezone, resolve_columns, today_in,
    AliasSet, ColumnMap, MetricResult, MetricType, MetricsError, MetricsReport,
};
pub use export::{write_results_workbook, ExportError};
pub use telemetry::{generate_correlation_id, init_telemetry};
