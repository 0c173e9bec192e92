//! Command-line surface for `storemap`.
//!
//! The job takes no positional arguments: one invocation performs one
//! generation run. Catalog endpoints and the output location come from
//! the environment (`STOREMAP_API_URL`, `STOREMAP_SITE_URL`,
//! `STOREMAP_OUTPUT`); the flags here only shape console output.

use clap::Parser;

/// Generate an XML sitemap from the product catalog.
#[derive(Parser, Debug)]
#[command(name = "storemap")]
#[command(version)]
#[command(about = "Generate an XML sitemap from the product catalog", long_about = None)]
pub struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}
