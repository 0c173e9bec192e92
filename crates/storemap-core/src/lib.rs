//! # storemap-core
//!
//! Core library for storemap - a batch job that turns a live product and
//! category catalog into a crawler-ready XML sitemap (sitemap protocol
//! 0.9 with the image extension 1.1).
//!
//! ## Architecture
//!
//! The crate is organized around the stages of one generation run:
//!
//! - **Configuration**: immutable run configuration from the environment
//! - **Fetching**: bounded-timeout HTTP client for the catalog service
//! - **Extraction**: envelope unwrapping into one concrete record sequence
//! - **Normalization**: catalog records into sitemap entries
//! - **Rendering**: escaped, namespaced XML document assembly
//! - **Persistence**: atomic artifact write
//!
//! ## Failure model
//!
//! A failed or misshapen catalog source degrades to zero entries and the
//! run continues, falling back to a static-route-only document if it
//! must. Only the final artifact write can fail a run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storemap_core::{Config, pipeline};
//!
//! # async fn example() -> storemap_core::Result<()> {
//! let config = Config::from_env()?;
//! let report = pipeline::run(&config).await?;
//! println!(
//!     "{} categories, {} products -> {}",
//!     report.categories,
//!     report.products,
//!     report.output.display()
//! );
//! # Ok(())
//! # }
//! ```

/// Atomic persistence of the generated document
pub mod artifact;
/// Catalog response envelopes and page extraction
pub mod catalog;
/// Run configuration and the static route table
pub mod config;
/// Error types and result alias
pub mod error;
/// HTTP client for the catalog service
pub mod fetcher;
/// Record-to-entry normalization
pub mod normalize;
/// Pipeline orchestration
pub mod pipeline;
/// Sitemap XML rendering
pub mod sitemap;
/// Core data types
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogPage, CatalogRecord, RecordId, extract_page};
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::CatalogClient;
pub use normalize::normalize;
pub use pipeline::{RunReport, run};
pub use sitemap::render_sitemap;
pub use types::{ChangeFrequency, EntryClass, ImageRef, SitemapUrl, StaticRoute};
