//! Pipeline orchestration: fetch, extract, normalize, render, write.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::catalog::{CatalogRecord, extract_page};
use crate::config::Config;
use crate::fetcher::CatalogClient;
use crate::normalize::normalize;
use crate::sitemap::render_sitemap;
use crate::types::{EntryClass, SitemapUrl};
use crate::{Result, artifact};

/// Entry counts and artifact location for a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Category entries emitted.
    pub categories: usize,
    /// Product entries emitted.
    pub products: usize,
    /// Records dropped for missing ids, across both sources.
    pub skipped: usize,
    /// Where the document was written.
    pub output: PathBuf,
}

/// Runs the full catalog-to-sitemap job.
///
/// Each catalog source is attempted exactly once; a failed or
/// unexpectedly shaped response degrades that source to zero entries and
/// the run continues with the rest. Only the final artifact write can
/// fail the run.
pub async fn run(config: &Config) -> Result<RunReport> {
    run_at(config, Utc::now().date_naive()).await
}

/// Runs the job with an explicit run date.
///
/// The run date is the `lastmod` value for static routes and the
/// fallback for records without timestamps; taking it as a parameter
/// keeps the run a pure function of configuration and fetched data.
pub async fn run_at(config: &Config, run_date: NaiveDate) -> Result<RunReport> {
    let client = CatalogClient::with_timeout(&config.api_url, config.request_timeout)?;

    let (categories, skipped_categories) =
        load_source(&client, "/categories", EntryClass::Category, config, run_date).await;

    let products_path = format!("/products?size={}&page=0", config.product_page_size);
    let (products, skipped_products) =
        load_source(&client, &products_path, EntryClass::Product, config, run_date).await;

    let document = render_sitemap(
        &config.site_url,
        &config.routes,
        &categories,
        &products,
        run_date,
    )?;
    artifact::write_sitemap(&config.output, &document)?;

    info!(
        categories = categories.len(),
        products = products.len(),
        output = %config.output.display(),
        "Sitemap generated"
    );
    Ok(RunReport {
        categories: categories.len(),
        products: products.len(),
        skipped: skipped_categories + skipped_products,
        output: config.output.clone(),
    })
}

/// Fetches and normalizes one catalog source, returning its entries and
/// the number of id-less records dropped.
async fn load_source(
    client: &CatalogClient,
    path: &str,
    class: EntryClass,
    config: &Config,
    run_date: NaiveDate,
) -> (Vec<SitemapUrl>, usize) {
    let envelope = client.try_fetch(path).await;
    let records = extract_page(envelope).into_records();
    normalize_records(&records, class, &config.site_url, run_date, path)
}

fn normalize_records(
    records: &[CatalogRecord],
    class: EntryClass,
    site_url: &str,
    run_date: NaiveDate,
    path: &str,
) -> (Vec<SitemapUrl>, usize) {
    let mut entries = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match normalize(record, class, site_url, run_date) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("Skipped {skipped} record(s) without ids from '{path}'");
    }
    (entries, skipped)
}
