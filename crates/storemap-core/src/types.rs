//! Core data types for sitemap entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Change frequency hints emitted per entry class.
///
/// Search engines treat these as hints, not commands; each entry class
/// carries a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    Weekly,
    /// The page changes monthly.
    Monthly,
}

impl ChangeFrequency {
    /// Sitemap-protocol spelling of the hint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Which catalog collection a record came from.
///
/// The class selects the fixed changefreq/priority pair and the location
/// template for normalized entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryClass {
    /// A category listing page.
    Category,
    /// A product detail page.
    Product,
}

impl EntryClass {
    /// Fixed change frequency for entries of this class.
    #[must_use]
    pub const fn change_frequency(self) -> ChangeFrequency {
        match self {
            Self::Category | Self::Product => ChangeFrequency::Weekly,
        }
    }

    /// Fixed crawl priority for entries of this class.
    #[must_use]
    pub const fn priority(self) -> f32 {
        match self {
            Self::Category => 0.7,
            Self::Product => 0.8,
        }
    }

    /// Site-relative location for a record id under this class.
    #[must_use]
    pub fn path_for(self, id: &str) -> String {
        match self {
            Self::Category => format!("/category/{id}"),
            Self::Product => format!("/product/{id}"),
        }
    }
}

/// Image extension block attached to product entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute image URL.
    pub loc: String,
    /// Human-readable caption (the product name).
    pub caption: String,
}

/// A single `<url>` entry in the generated document.
///
/// Values are carried unescaped; XML escaping happens exactly once, at
/// serialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapUrl {
    /// Absolute page URL.
    pub loc: String,
    /// Last modification date, truncated to the calendar day.
    pub lastmod: NaiveDate,
    /// Change frequency hint.
    pub changefreq: ChangeFrequency,
    /// Crawl priority in `[0.0, 1.0]`.
    pub priority: f32,
    /// Optional image block (products with a non-empty image URL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

/// A fixed, hard-coded crawl route that never comes from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct StaticRoute {
    /// Site-relative path (leading slash).
    pub path: &'static str,
    /// Change frequency hint for the route.
    pub changefreq: ChangeFrequency,
    /// Crawl priority for the route.
    pub priority: f32,
}
