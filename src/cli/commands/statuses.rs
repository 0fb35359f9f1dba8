use anyhow::Result;
use std::path::Path;

use crate::cli::commands::load_dataset;
use crate::config::config;
use crate::engine::{compute_metrics, parse_timezone, today_in, AliasSet};

/// List the distinct normalized status values in an export, without the
/// metrics table. Same retention rules as `compute`: rows with a blank key
/// or unparseable date contribute nothing.
pub fn run(input: &Path) -> Result<()> {
    let cfg = config()?;
    let tz = parse_timezone(&cfg.metrics.timezone)?;
    let in_progress = AliasSet::parse(&cfg.metrics.in_progress_aliases);
    let done = AliasSet::parse(&cfg.metrics.done_aliases);

    let dataset = load_dataset(input)?;
    let report = compute_metrics(&dataset, &in_progress, &done, today_in(tz))?;

    println!();
    println!("📋 Unique status values found ({}):", report.statuses.len());
    for status in &report.statuses {
        println!("   • {}", status);
    }
    if report.statuses.is_empty() {
        println!("   —");
    }
    Ok(())
}
