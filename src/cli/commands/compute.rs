use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::cli::commands::load_dataset;
use crate::config::config;
use crate::engine::{compute_metrics, parse_timezone, today_in, AliasSet, MetricsReport};
use crate::export::write_results_workbook;
use crate::telemetry::{create_compute_span, generate_correlation_id};

pub fn run(
    input: &Path,
    timezone: Option<String>,
    in_progress: Option<String>,
    done: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = config()?;
    let tz_name = timezone.unwrap_or_else(|| cfg.metrics.timezone.clone());
    let tz = parse_timezone(&tz_name)?;
    let in_progress = AliasSet::parse(
        in_progress
            .as_deref()
            .unwrap_or(&cfg.metrics.in_progress_aliases),
    );
    let done = AliasSet::parse(done.as_deref().unwrap_or(&cfg.metrics.done_aliases));

    let correlation_id = generate_correlation_id();
    let span = create_compute_span("compute", input.to_str(), Some(&correlation_id));
    let _guard = span.enter();

    let dataset = load_dataset(input)?;
    let today = today_in(tz);
    tracing::info!(timezone = %tz_name, %today, rows = dataset.len(), "computing metrics");

    let report = compute_metrics(&dataset, &in_progress, &done, today)?;

    print_results(&report, &tz_name, today);

    if let Some(path) = &output {
        write_results_workbook(path, &report)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!();
        println!("⬇️  Wrote {} result rows to {}", report.results.len(), path.display());
    }

    print_statuses(&report.statuses);
    Ok(())
}

fn print_results(report: &MetricsReport, tz_name: &str, today: NaiveDate) {
    println!();
    println!("📊 RESULTS ({} items, today = {} in {})", report.results.len(), today, tz_name);
    println!("──────────────────────────────────────────────");

    if report.results.is_empty() {
        println!("ℹ️  No items with qualifying transitions found");
        println!("   💡 Check the alias lists if your team uses different status names");
        return;
    }

    let key_width = report
        .results
        .iter()
        .map(|r| r.key.len())
        .max()
        .unwrap_or(3)
        .max(3);

    println!(
        "{:<key_width$}  {:<12}  {:<12}  {:>5}  {}",
        "Key", "In Progress", "Done", "Days", "Metric Type"
    );
    for result in &report.results {
        let format_date = |date: Option<NaiveDate>| {
            date.map(|d| d.to_string()).unwrap_or_else(|| "—".to_string())
        };
        println!(
            "{:<key_width$}  {:<12}  {:<12}  {:>5}  {}",
            result.key,
            format_date(result.first_in_progress_date),
            format_date(result.first_done_date),
            result
                .days
                .map(|d| d.to_string())
                .unwrap_or_else(|| "—".to_string()),
            result
                .metric_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "—".to_string()),
        );
    }
}

fn print_statuses(statuses: &[String]) {
    println!();
    println!("📋 Unique status values found:");
    if statuses.is_empty() {
        println!("   —");
    } else {
        println!("   {}", statuses.join(", "));
    }
}
