//! Catalog response envelopes and page extraction.
//!
//! The catalog service wraps every collection in a JSON envelope whose
//! `data` field is either the record array itself or a paginated wrapper
//! carrying the array under `content`. Both shapes are resolved once, at
//! this boundary, into a [`CatalogPage`] so downstream components only
//! ever see one concrete record sequence.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// One record from the catalog service.
///
/// Opaque to the pipeline except for the fields a sitemap entry needs;
/// unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Source identifier. Records without one are skipped downstream.
    pub id: Option<RecordId>,
    /// Last-update timestamp, preferred for `lastmod`.
    pub updated_at: Option<String>,
    /// Creation timestamp, the `lastmod` fallback.
    pub created_at: Option<String>,
    /// Product image URL, if any.
    pub image_url: Option<String>,
    /// Product name, used as the image caption.
    pub name: Option<String>,
}

/// Catalog identifiers arrive as JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier (slug or UUID).
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A fetched catalog page resolved to one concrete shape.
#[derive(Debug)]
pub enum CatalogPage {
    /// The fetch failed or the envelope carried no usable payload.
    Empty,
    /// Records in exactly the order the service returned them.
    Records(Vec<CatalogRecord>),
}

impl CatalogPage {
    /// Flattens the page into a record list (empty when no data).
    #[must_use]
    pub fn into_records(self) -> Vec<CatalogRecord> {
        match self {
            Self::Empty => Vec::new(),
            Self::Records(records) => records,
        }
    }
}

/// Resolves a fetch envelope into a [`CatalogPage`].
///
/// Accepts `{ data: [...] }` and the paginated `{ data: { content: [...] } }`
/// shape; anything else, including an absent envelope from a failed
/// fetch, yields [`CatalogPage::Empty`]. Response ordering is preserved
/// exactly: the sitemap's crawl order is a direct function of API order.
#[must_use]
pub fn extract_page(envelope: Option<Value>) -> CatalogPage {
    let Some(envelope) = envelope else {
        return CatalogPage::Empty;
    };
    let Some(data) = envelope.get("data") else {
        return CatalogPage::Empty;
    };
    let items = match data {
        Value::Array(items) => items.as_slice(),
        Value::Object(fields) => match fields.get("content") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => return CatalogPage::Empty,
        },
        _ => return CatalogPage::Empty,
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<CatalogRecord>(item.clone()) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed catalog record: {e}"),
        }
    }
    CatalogPage::Records(records)
}
