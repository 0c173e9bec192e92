//! Run configuration for the sitemap pipeline.
//!
//! All knobs are resolved once, environment overrides over fixed local
//! defaults, into an immutable [`Config`] value handed to
//! [`crate::pipeline::run`]. The pipeline is then a pure function of this
//! value and the fetched catalog data.
//!
//! ## Environment overrides
//!
//! - `STOREMAP_API_URL` - catalog service base URL
//! - `STOREMAP_SITE_URL` - storefront root prepended to every location
//! - `STOREMAP_OUTPUT` - artifact output path

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::types::{ChangeFrequency, StaticRoute};
use crate::{Error, Result};

/// Default catalog API base URL for local development.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default storefront root used to build absolute sitemap locations.
const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Default artifact location, relative to the working directory.
const DEFAULT_OUTPUT: &str = "public/sitemap.xml";

/// Page size used to retrieve the full product catalog in one round-trip.
const PRODUCT_PAGE_SIZE: u32 = 1000;

/// Bounded per-request timeout so a hung endpoint cannot stall the job.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The fixed route table, ordered by crawl priority. These are emitted
/// ahead of all catalog entries.
const STATIC_ROUTES: [StaticRoute; 4] = [
    StaticRoute {
        path: "/",
        changefreq: ChangeFrequency::Daily,
        priority: 1.0,
    },
    StaticRoute {
        path: "/products",
        changefreq: ChangeFrequency::Daily,
        priority: 0.9,
    },
    StaticRoute {
        path: "/categories",
        changefreq: ChangeFrequency::Weekly,
        priority: 0.8,
    },
    StaticRoute {
        path: "/about",
        changefreq: ChangeFrequency::Monthly,
        priority: 0.6,
    },
];

/// Immutable configuration for one sitemap generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog API base URL, no trailing slash.
    pub api_url: String,
    /// Storefront root prepended to every sitemap location, no trailing slash.
    pub site_url: String,
    /// Output path for the generated document.
    pub output: PathBuf,
    /// Number of products requested per page.
    pub product_page_size: u32,
    /// Per-request timeout applied to catalog calls.
    pub request_timeout: Duration,
    /// Fixed crawl routes emitted ahead of catalog entries.
    pub routes: Vec<StaticRoute>,
}

impl Config {
    /// Builds the run configuration from the process environment.
    ///
    /// Unset variables fall back to the local-development defaults. Base
    /// URLs are validated up front so a malformed override fails the run
    /// before any network call.
    pub fn from_env() -> Result<Self> {
        let api_url = base_url_from_env("STOREMAP_API_URL", DEFAULT_API_URL)?;
        let site_url = base_url_from_env("STOREMAP_SITE_URL", DEFAULT_SITE_URL)?;
        let output = std::env::var("STOREMAP_OUTPUT")
            .map_or_else(|_| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

        Ok(Self {
            api_url,
            site_url,
            output,
            product_page_size: PRODUCT_PAGE_SIZE,
            request_timeout: REQUEST_TIMEOUT,
            routes: STATIC_ROUTES.to_vec(),
        })
    }
}

/// Reads a base URL from the environment, validating it and stripping any
/// trailing slash so path joining stays uniform.
fn base_url_from_env(var: &str, default: &str) -> Result<String> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_base_url(&raw).map_err(|e| Error::Config(format!("invalid {var} '{raw}': {e}")))
}

fn parse_base_url(raw: &str) -> std::result::Result<String, url::ParseError> {
    let parsed = Url::parse(raw)?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
