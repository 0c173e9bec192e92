//! Sitemap XML document rendering.
//!
//! Emits a single `urlset` document carrying the sitemap protocol 0.9
//! default namespace and the Google image extension 1.1 namespace. Every
//! text value is escaped exactly once by the writer at serialization
//! time, so upstream components hand over raw strings.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::types::{SitemapUrl, StaticRoute};
use crate::{Error, Result};

/// Sitemap protocol namespace.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Google image extension namespace.
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// Renders the complete sitemap document.
///
/// Entry order is fixed: static routes in table order, then categories,
/// then products, each in the order the catalog returned them. The
/// high-priority static pages lead the document. Empty catalog
/// sequences still produce a well-formed, static-only document.
pub fn render_sitemap(
    site_url: &str,
    routes: &[StaticRoute],
    categories: &[SitemapUrl],
    products: &[SitemapUrl],
    run_date: NaiveDate,
) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:image", IMAGE_NS));
    write_event(&mut writer, Event::Start(urlset))?;

    for route in routes {
        let entry = SitemapUrl {
            loc: format!("{site_url}{}", route.path),
            lastmod: run_date,
            changefreq: route.changefreq,
            priority: route.priority,
            image: None,
        };
        write_url(&mut writer, &entry)?;
    }
    for entry in categories.iter().chain(products) {
        write_url(&mut writer, entry)?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Parse(format!("sitemap is not valid UTF-8: {e}")))
}

/// Writes one `<url>` element with the fixed child order: `loc`,
/// `lastmod`, `changefreq`, `priority`, then the optional image block.
fn write_url(writer: &mut Writer<Vec<u8>>, entry: &SitemapUrl) -> Result<()> {
    write_event(writer, Event::Start(BytesStart::new("url")))?;
    write_text(writer, "loc", &entry.loc)?;
    write_text(writer, "lastmod", &entry.lastmod.format("%Y-%m-%d").to_string())?;
    write_text(writer, "changefreq", entry.changefreq.as_str())?;
    write_text(writer, "priority", &format!("{:.1}", entry.priority))?;
    if let Some(image) = &entry.image {
        write_event(writer, Event::Start(BytesStart::new("image:image")))?;
        write_text(writer, "image:loc", &image.loc)?;
        write_text(writer, "image:caption", &image.caption)?;
        write_event(writer, Event::End(BytesEnd::new("image:image")))?;
    }
    write_event(writer, Event::End(BytesEnd::new("url")))?;
    Ok(())
}

/// Writes `<name>text</name>`. [`BytesText::new`] escapes the five XML
/// reserved characters, ampersand substitution first, so an already-raw
/// string is never double-escaped.
fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Parse(format!("XML write error: {e}")))
}
