use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod dataset;
mod engine;
mod export;
mod telemetry;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let _ = telemetry::init_telemetry();
    let cli = Cli::parse();

    match cli.command {
        // Default behavior: no subcommand - explain how to get started
        None => cli::commands::show_usage_overview(),
        Some(Commands::Compute {
            input,
            timezone,
            in_progress,
            done,
            output,
        }) => cli::commands::compute::run(&input, timezone, in_progress, done, output),
        Some(Commands::Statuses { input }) => cli::commands::statuses::run(&input),
    }
}
