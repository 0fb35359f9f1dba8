use anyhow::{Context, Result};
use std::path::Path;

use crate::dataset::{read_table, Dataset};

pub mod compute;
pub mod statuses;

/// Read an export file with the shared console texture.
pub fn load_dataset(input: &Path) -> Result<Dataset> {
    print!("📂 Reading {}... ", input.display());
    std::io::Write::flush(&mut std::io::stdout()).ok();

    match read_table(input) {
        Ok(dataset) => {
            println!("✅ ({} rows)", dataset.len());
            Ok(dataset)
        }
        Err(e) => {
            println!("❌");
            Err(e).with_context(|| format!("Failed to read {}", input.display()))
        }
    }
}

pub fn show_usage_overview() -> Result<()> {
    println!("⏱️  FlowMetrics - Cycle Time & Work Item Age");
    println!();
    println!("To get started:");
    println!("  📊 flowmetrics compute export.csv            # Compute metrics");
    println!("  📊 flowmetrics compute export.xlsx -o out.xlsx");
    println!("  📋 flowmetrics statuses export.csv           # List distinct statuses");
    println!();
    println!("Expected columns (case-insensitive):");
    println!("  Key, Date of change, Status, Status [new]");
    println!();
    println!("Defaults (override with --timezone, --in-progress, --done or flowmetrics.toml):");
    println!("  Timezone:    America/New_York");
    println!("  In Progress: IN PROGRESS,IN-PROGRESS,IN_PROGRESS,INPROGRESS");
    println!("  Done:        DONE,CLOSED,RESOLVED");
    Ok(())
}
