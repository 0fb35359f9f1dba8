use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two flow metrics a result row carries.
/// `CycleTime` wins whenever a done transition exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricType {
    /// First done transition exists: days from first in-progress to first done.
    CycleTime,
    /// In progress but not done yet: days from first in-progress to today.
    WorkItemAge,
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MetricType::CycleTime => "Cycle Time",
            MetricType::WorkItemAge => "Work Item Age",
        };
        write!(f, "{}", label)
    }
}

/// Earliest qualifying transitions for one work item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionRecord {
    pub first_in_progress_date: Option<NaiveDate>,
    pub first_done_date: Option<NaiveDate>,
}

/// One computed row of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricResult {
    pub key: String,
    pub first_in_progress_date: Option<NaiveDate>,
    pub first_done_date: Option<NaiveDate>,
    /// Inclusive day count. Absent when no in-progress transition was seen.
    /// May be zero or negative when the done date precedes the in-progress
    /// date; reported as computed.
    pub days: Option<i64>,
    pub metric_type: Option<MetricType>,
}

/// Everything one computation produces: the per-item results plus the
/// sorted catalog of distinct status strings seen in the retained rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub results: Vec<MetricResult>,
    pub statuses: Vec<String>,
}
