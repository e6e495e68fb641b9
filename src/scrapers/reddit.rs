//! Subreddit Atom feed extraction.
//!
//! The feed is treated as loosely structured text rather than validated XML.
//! Embedded HTML arrives double-escaped and fields come and go between records,
//! so each field has its own small extractor returning `Option`, and callers
//! compose them with explicit fallbacks:
//!
//! - **Entries**: every `<entry>` with a non-empty title and link, in feed order.
//!   Records missing either are dropped without complaint.
//! - **Featured item**: built from the first `<entry>` only. The image comes from
//!   `<media:thumbnail>`, else the first `<img src=...>` inside `<content>`.
//!   Without any image candidate the fixed fallback item is used.

use super::Fetch;
use crate::error::MewsError;
use crate::models::{FALLBACK_PERMALINK, FeaturedItem, FeedEntry};
use crate::utils::{is_likely_image_url, truncate_for_log, unescape_xml_entities};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument, warn};

/// Top posts of the day on r/Catmemes.
pub const DEFAULT_FEED_URL: &str = "https://www.reddit.com/r/Catmemes/top/.rss?t=day";

/// Featured title used when the first record has an image but no title.
pub const DEFAULT_FEATURED_TITLE: &str = "A Very Serious Cat Development";

static ENTRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<entry(?:\s[^>]*)?>(.*?)</entry>").unwrap());
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<title(?:\s[^>]*)?>(.*?)</title>").unwrap());
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<link\b[^>]*?\bhref="([^"]+)"[^>]*?/?>"#).unwrap());
static AUTHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<author>.*?<name>(.*?)</name>.*?</author>").unwrap());
static THUMBNAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<media:thumbnail\b[^>]*?\burl="([^"]+)"[^>]*?/?>"#).unwrap());
static CONTENT_IMG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<content[^>]*>.*?(?:<|&lt;)img\s+src=&quot;([^&]*)&quot;").unwrap()
});

fn capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Unescaped, trimmed text of a field; `None` when missing or blank.
fn text_field(re: &Regex, record: &str) -> Option<String> {
    capture(re, record)
        .map(|raw| unescape_xml_entities(raw).trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Bodies of all `<entry>` records, in feed order.
fn records(xml: &str) -> impl Iterator<Item = &str> {
    ENTRY_RE
        .captures_iter(xml)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn extract_title(record: &str) -> Option<String> {
    text_field(&TITLE_RE, record)
}

pub fn extract_permalink(record: &str) -> Option<String> {
    text_field(&LINK_RE, record)
}

pub fn extract_author(record: &str) -> Option<String> {
    text_field(&AUTHOR_RE, record)
}

/// `<media:thumbnail url="...">`, unescaped.
pub fn extract_thumbnail(record: &str) -> Option<String> {
    capture(&THUMBNAIL_RE, record).map(image_candidate).filter(|s| !s.is_empty())
}

/// First `<img src=&quot;...&quot;>` inside the escaped `<content>` block.
pub fn extract_content_image(record: &str) -> Option<String> {
    capture(&CONTENT_IMG_RE, record).map(image_candidate).filter(|s| !s.is_empty())
}

// Image URLs can carry one more layer of `&amp;` than the surrounding text.
fn image_candidate(raw: &str) -> String {
    unescape_xml_entities(raw).replace("&amp;", "&").trim().to_string()
}

/// Parse every usable entry from the feed.
pub fn parse_entries(xml: &str) -> Vec<FeedEntry> {
    let mut entries = Vec::new();
    let mut dropped = 0usize;
    for record in records(xml) {
        match (extract_title(record), extract_permalink(record)) {
            (Some(title), Some(permalink)) => entries.push(FeedEntry {
                title,
                permalink,
                author: extract_author(record).unwrap_or_default(),
            }),
            _ => dropped += 1,
        }
    }
    debug!(kept = entries.len(), dropped, "Parsed feed entries");
    entries
}

/// Build the featured item from the first entry, or fall back.
pub fn parse_featured(xml: &str) -> FeaturedItem {
    let Some(first) = records(xml).next() else {
        warn!("Feed has no entries; using fallback featured item");
        return FeaturedItem::fallback();
    };

    let candidates: Vec<String> = [extract_thumbnail(first), extract_content_image(first)]
        .into_iter()
        .flatten()
        .collect();

    let Some(image_url) = candidates
        .iter()
        .find(|u| is_likely_image_url(u))
        .or_else(|| candidates.first())
        .cloned()
    else {
        warn!("First entry has no image candidate; using fallback featured item");
        return FeaturedItem::fallback();
    };

    // A blank title still counts as present here; only a missing tag gets the default.
    let title = capture(&TITLE_RE, first)
        .map(|raw| unescape_xml_entities(raw).trim().to_string())
        .unwrap_or_else(|| DEFAULT_FEATURED_TITLE.to_string());

    FeaturedItem {
        title,
        permalink: extract_permalink(first).unwrap_or_else(|| FALLBACK_PERMALINK.to_string()),
        image_url,
    }
}

/// Fetch the feed and pick the featured item.
#[instrument(level = "info", skip(fetcher))]
pub async fn find_featured(
    fetcher: &impl Fetch,
    feed_url: &str,
) -> Result<FeaturedItem, MewsError> {
    let xml = fetcher.fetch_text(feed_url).await?;
    debug!(preview = %truncate_for_log(&xml, 200), "Feed body");
    let featured = parse_featured(&xml);
    info!(title = %featured.title, image_url = %featured.image_url, "Selected featured item");
    Ok(featured)
}

/// Fetch the feed and return its usable entries.
#[instrument(level = "info", skip(fetcher))]
pub async fn fetch_entries(
    fetcher: &impl Fetch,
    feed_url: &str,
) -> Result<Vec<FeedEntry>, MewsError> {
    let xml = fetcher.fetch_text(feed_url).await?;
    let entries = parse_entries(&xml);
    info!(count = entries.len(), "Extracted feed entries");
    Ok(entries)
}
