//! Catalog record normalization into sitemap entries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::catalog::CatalogRecord;
use crate::types::{EntryClass, ImageRef, SitemapUrl};

/// Maps a catalog record to a sitemap entry.
///
/// Returns `None` when the record carries no id; callers count those
/// skips. Timestamp preference is `updatedAt`, then `createdAt`, then
/// the run date, always truncated to the calendar day. Raw strings are
/// carried untouched here; XML escaping happens once, in the serializer.
#[must_use]
pub fn normalize(
    record: &CatalogRecord,
    class: EntryClass,
    site_url: &str,
    run_date: NaiveDate,
) -> Option<SitemapUrl> {
    let id = record.id.as_ref()?;
    let image = match class {
        EntryClass::Product => image_ref(record),
        EntryClass::Category => None,
    };
    Some(SitemapUrl {
        loc: format!("{site_url}{}", class.path_for(&id.to_string())),
        lastmod: last_modified(record, run_date),
        changefreq: class.change_frequency(),
        priority: class.priority(),
        image,
    })
}

/// Builds the image block for a product with a non-empty image URL.
fn image_ref(record: &CatalogRecord) -> Option<ImageRef> {
    let loc = record.image_url.as_deref().filter(|url| !url.is_empty())?;
    Some(ImageRef {
        loc: loc.to_string(),
        caption: record.name.clone().unwrap_or_default(),
    })
}

fn last_modified(record: &CatalogRecord, run_date: NaiveDate) -> NaiveDate {
    record
        .updated_at
        .as_deref()
        .and_then(parse_timestamp)
        .or_else(|| record.created_at.as_deref().and_then(parse_timestamp))
        .unwrap_or(run_date)
}

/// Parses a catalog timestamp into a calendar date.
///
/// Supports the formats the catalog is known to emit:
/// - `2024-01-15` (date only)
/// - `2024-01-15T10:30:00Z` / `2024-01-15T10:30:00+00:00` (RFC 3339)
/// - `2024-01-15T10:30:00` (naive, assumed UTC)
/// - `2024-01-15T10:30:00.000` (fractional seconds)
fn parse_timestamp(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    tracing::debug!(timestamp = %s, "Could not parse catalog timestamp");
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::RecordId;
    use crate::types::ChangeFrequency;

    const SITE: &str = "https://shop.example.com";

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn record(id: Option<RecordId>) -> CatalogRecord {
        CatalogRecord {
            id,
            updated_at: None,
            created_at: None,
            image_url: None,
            name: None,
        }
    }

    #[test]
    fn category_entry_uses_fixed_constants() {
        let rec = record(Some(RecordId::Number(5)));
        let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
        assert_eq!(entry.loc, "https://shop.example.com/category/5");
        assert_eq!(entry.changefreq, ChangeFrequency::Weekly);
        assert_eq!(entry.priority, 0.7);
        assert!(entry.image.is_none());
    }

    #[test]
    fn record_without_id_is_skipped() {
        assert!(normalize(&record(None), EntryClass::Product, SITE, run_date()).is_none());
    }

    #[test]
    fn updated_at_wins_over_created_at() {
        let mut rec = record(Some(RecordId::Number(1)));
        rec.updated_at = Some("2024-03-01T08:45:00Z".to_string());
        rec.created_at = Some("2023-01-01T00:00:00Z".to_string());
        let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
        assert_eq!(entry.lastmod, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn created_at_is_the_fallback() {
        let mut rec = record(Some(RecordId::Number(1)));
        rec.created_at = Some("2023-11-20T12:00:00Z".to_string());
        let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
        assert_eq!(entry.lastmod, NaiveDate::from_ymd_opt(2023, 11, 20).unwrap());
    }

    #[test]
    fn run_date_substitutes_missing_timestamps() {
        let rec = record(Some(RecordId::Number(1)));
        let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
        assert_eq!(entry.lastmod, run_date());
    }

    #[test]
    fn unparseable_timestamp_falls_through() {
        let mut rec = record(Some(RecordId::Number(1)));
        rec.updated_at = Some("yesterday".to_string());
        rec.created_at = Some("2023-11-20".to_string());
        let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
        assert_eq!(entry.lastmod, NaiveDate::from_ymd_opt(2023, 11, 20).unwrap());
    }

    #[test]
    fn time_of_day_is_discarded() {
        for ts in [
            "2024-03-01T23:59:59Z",
            "2024-03-01T23:59:59",
            "2024-03-01T23:59:59.999",
            "2024-03-01",
        ] {
            let mut rec = record(Some(RecordId::Number(1)));
            rec.updated_at = Some(ts.to_string());
            let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
            assert_eq!(
                entry.lastmod,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "timestamp {ts}"
            );
        }
    }

    #[test]
    fn product_with_image_gets_image_block() {
        let mut rec = record(Some(RecordId::Number(9)));
        rec.image_url = Some("https://cdn.example.com/9.jpg".to_string());
        rec.name = Some("Espresso Machine".to_string());
        let entry = normalize(&rec, EntryClass::Product, SITE, run_date()).unwrap();
        assert_eq!(entry.loc, "https://shop.example.com/product/9");
        assert_eq!(entry.priority, 0.8);
        let image = entry.image.unwrap();
        assert_eq!(image.loc, "https://cdn.example.com/9.jpg");
        assert_eq!(image.caption, "Espresso Machine");
    }

    #[test]
    fn empty_image_url_yields_no_image_block() {
        let mut rec = record(Some(RecordId::Number(9)));
        rec.image_url = Some(String::new());
        rec.name = Some("Espresso Machine".to_string());
        let entry = normalize(&rec, EntryClass::Product, SITE, run_date()).unwrap();
        assert!(entry.image.is_none());
    }

    #[test]
    fn missing_name_yields_empty_caption() {
        let mut rec = record(Some(RecordId::Number(9)));
        rec.image_url = Some("https://cdn.example.com/9.jpg".to_string());
        let entry = normalize(&rec, EntryClass::Product, SITE, run_date()).unwrap();
        assert_eq!(entry.image.unwrap().caption, "");
    }

    #[test]
    fn categories_never_carry_images() {
        let mut rec = record(Some(RecordId::Number(5)));
        rec.image_url = Some("https://cdn.example.com/banner.jpg".to_string());
        let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
        assert!(entry.image.is_none());
    }

    #[test]
    fn string_ids_build_locations() {
        let rec = record(Some(RecordId::Text("ceramic-mugs".to_string())));
        let entry = normalize(&rec, EntryClass::Category, SITE, run_date()).unwrap();
        assert_eq!(entry.loc, "https://shop.example.com/category/ceramic-mugs");
    }
}
