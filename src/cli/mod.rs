use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "flowmetrics")]
#[command(about = "Cycle time and work item age from issue-history exports")]
#[command(long_about = "FlowMetrics reads an issue-history export (CSV or Excel, one row per \
                       status change) and computes per-item cycle time and work item age. \
                       Get started with 'flowmetrics compute your-export.csv'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute cycle time and work item age from an export file (primary command)
    Compute {
        /// Path to the issue-history export (.csv, .xlsx or .xls)
        input: PathBuf,
        /// IANA timezone for "today" when computing work item age
        #[arg(long, help = "Timezone used for 'today', e.g. America/New_York")]
        timezone: Option<String>,
        /// Statuses treated as the start of work
        #[arg(
            long = "in-progress",
            help = "Comma-separated 'Status [new]' values that count as In Progress"
        )]
        in_progress: Option<String>,
        /// Statuses treated as completed
        #[arg(long, help = "Comma-separated 'Status [new]' values that count as Done")]
        done: Option<String>,
        /// Write the results to an Excel workbook at this path
        #[arg(long, short = 'o', help = "Write results to this .xlsx file")]
        output: Option<PathBuf>,
    },
    /// List the distinct status values found in an export file
    Statuses {
        /// Path to the issue-history export (.csv, .xlsx or .xls)
        input: PathBuf,
    },
}
