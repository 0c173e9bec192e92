//! storemap CLI - catalog-to-sitemap generation
//!
//! Entry point for the `storemap` batch job. Parses flags, initializes
//! logging, builds the run configuration from the environment, and runs
//! the pipeline once. A failed artifact write is the only error class
//! that reaches the exit status; failed catalog sources degrade to empty
//! and the run completes.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use storemap_core::{Config, pipeline};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let config = Config::from_env()?;
    let report = pipeline::run(&config).await?;

    if !cli.quiet {
        println!(
            "{} {} static, {} categories, {} products -> {}",
            "Sitemap written:".green(),
            config.routes.len(),
            report.categories,
            report.products,
            report.output.display()
        );
        if report.skipped > 0 {
            eprintln!(
                "{} {} record(s) skipped (missing id)",
                "warning:".yellow(),
                report.skipped
            );
        }
    }

    Ok(())
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
