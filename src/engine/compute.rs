//! Metric computation entrypoint.
//!
//! One pass over the dataset: resolve columns, normalize statuses, parse
//! timestamps, drop rows that carry no information, then reduce to the
//! earliest qualifying transition per item and classify.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::dataset::{Cell, Dataset};
use crate::engine::columns::resolve_columns;
use crate::engine::error::MetricsError;
use crate::engine::status::{normalize_status, AliasSet};
use crate::engine::timestamp::parse_timestamp;
use crate::engine::types::{MetricResult, MetricType, MetricsReport, TransitionRecord};

/// Current calendar date in an IANA timezone. Callers pass the result into
/// [`compute_metrics`] so the computation itself stays pure and testable
/// with a fixed clock.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Parse an IANA timezone identifier.
pub fn parse_timezone(name: &str) -> Result<Tz, MetricsError> {
    name.parse::<Tz>()
        .map_err(|_| MetricsError::UnknownTimezone(name.to_string()))
}

/// Compute cycle time and work item age for every item in the dataset.
///
/// Hard failure only on missing required columns; rows with a blank key or
/// an unparseable `Date of change` are silently dropped. `today` is the
/// current date in the caller's timezone (see [`today_in`]) and is only
/// consulted for items without a done transition.
pub fn compute_metrics(
    dataset: &Dataset,
    in_progress: &AliasSet,
    done: &AliasSet,
    today: NaiveDate,
) -> Result<MetricsReport, MetricsError> {
    let columns = resolve_columns(dataset.headers())?;

    let mut transitions: BTreeMap<String, TransitionRecord> = BTreeMap::new();
    let mut catalog: BTreeSet<String> = BTreeSet::new();
    let mut retained = 0usize;
    let mut discarded = 0usize;

    for row in dataset.rows() {
        let status_before = normalize_status(dataset.cell(row, columns.status_before));
        let status_after = normalize_status(dataset.cell(row, columns.status_after));
        let changed_at = parse_timestamp(dataset.cell(row, columns.changed_at));

        let key = match key_string(dataset.cell(row, columns.key)) {
            Some(key) => key,
            None => {
                discarded += 1;
                continue;
            }
        };
        let changed_at = match changed_at {
            Some(ts) => ts,
            None => {
                discarded += 1;
                continue;
            }
        };
        retained += 1;

        // Catalog collects from retained rows only, both status columns.
        for status in [&status_before, &status_after] {
            if let Cell::Text(s) = status {
                catalog.insert(s.clone());
            }
        }

        // Partition membership is evaluated independently on `Status [new]`;
        // a single row may qualify for both classes.
        if let Cell::Text(after) = &status_after {
            let date = changed_at.date();
            if in_progress.contains(after) {
                let record = transitions.entry(key.clone()).or_default();
                record.first_in_progress_date = min_date(record.first_in_progress_date, date);
            }
            if done.contains(after) {
                let record = transitions.entry(key).or_default();
                record.first_done_date = min_date(record.first_done_date, date);
            }
        }
    }

    tracing::debug!(retained, discarded, items = transitions.len(), "filtered events");

    let mut results: Vec<MetricResult> = transitions
        .into_iter()
        .map(|(key, record)| classify(key, &record, today))
        .collect();

    // Sort by (metric_type, key); rows with no classification land last.
    results.sort_by(|a, b| {
        let rank = |r: &MetricResult| (r.metric_type.is_none(), r.metric_type);
        rank(a).cmp(&rank(b)).then_with(|| a.key.cmp(&b.key))
    });

    Ok(MetricsReport {
        results,
        statuses: catalog.into_iter().collect(),
    })
}

/// Three-way classification of one joined transition record.
fn classify(key: String, record: &TransitionRecord, today: NaiveDate) -> MetricResult {
    let (days, metric_type) = match (record.first_in_progress_date, record.first_done_date) {
        (Some(start), Some(end)) => (
            Some((end - start).num_days() + 1),
            Some(MetricType::CycleTime),
        ),
        (Some(start), None) => (
            Some((today - start).num_days() + 1),
            Some(MetricType::WorkItemAge),
        ),
        // Done without an in-progress transition: still surfaced so the
        // caller can flag the anomaly, but it carries no day count.
        (None, Some(_)) => (None, Some(MetricType::CycleTime)),
        (None, None) => (None, None),
    };

    MetricResult {
        key,
        first_in_progress_date: record.first_in_progress_date,
        first_done_date: record.first_done_date,
        days,
        metric_type,
    }
}

fn min_date(current: Option<NaiveDate>, candidate: NaiveDate) -> Option<NaiveDate> {
    match current {
        Some(existing) if existing <= candidate => Some(existing),
        _ => Some(candidate),
    }
}

/// Item identifier from a key cell. Blank text counts as missing; numeric
/// keys (common in Excel exports) render as integers when fractionless.
fn key_string(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Cell::Number(n) if n.is_finite() => {
            if n.fract() == 0.0 {
                Some(format!("{}", *n as i64))
            } else {
                Some(n.to_string())
            }
        }
        _ => None,
    }
}
