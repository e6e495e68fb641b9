//! Data models shared by the extractor, the headline builder, and the outputs.
//!
//! - [`FeedEntry`]: one usable record from the feed
//! - [`FeaturedItem`]: the "meme of the day"
//! - [`Headline`]: a satirical story built from a template
//! - [`BuildResult`]: the JSON snapshot written to `data.json`
//!
//! Everything here is built fresh on each run; nothing is read back from a
//! previous build.

use serde::{Deserialize, Serialize};

/// Title used when neither a thumbnail nor an embedded image can be found.
pub const FALLBACK_TITLE: &str = "Breaking: Cat Seen Being A Cat";
/// Permalink of the fallback featured item.
pub const FALLBACK_PERMALINK: &str = "https://www.reddit.com/r/Catmemes/";
/// An always-on cat image.
pub const FALLBACK_IMAGE_URL: &str = "https://cataas.com/cat";

/// A single feed record with both required fields present.
///
/// Two entries are considered the same story when their titles match; the
/// headline builder deduplicates on `title` alone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedEntry {
    pub title: String,
    pub permalink: String,
    /// Display name of the poster, empty when the record has none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
}

/// The image-bearing item promoted to "meme of the day".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedItem {
    pub title: String,
    pub permalink: String,
    pub image_url: String,
}

impl FeaturedItem {
    /// The guaranteed-available item used when the feed yields no image.
    pub fn fallback() -> Self {
        FeaturedItem {
            title: FALLBACK_TITLE.to_string(),
            permalink: FALLBACK_PERMALINK.to_string(),
            image_url: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

/// A satirical story: a templated headline plus a fixed body line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Headline {
    pub headline: String,
    pub body: String,
}

/// The durable snapshot of one build, serialized verbatim to `data.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BuildResult {
    /// RFC 3339 timestamp in the publishing time zone.
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    /// IANA name of the publishing time zone.
    pub tz: String,
    pub meme: FeaturedItem,
    pub headlines: Vec<Headline>,
}
