//! The build, start to finish.
//!
//! Steps run strictly in order and the first failure ends the run:
//!
//! 1. **Gate**: outside the publishing hour (and not forced) nothing happens
//! 2. **Seed**: the local date becomes the PRNG seed
//! 3. **Featured item**: fetch the feed, pick the meme of the day
//! 4. **Image**: download it into `assets/`
//! 5. **Headlines**: fetch the feed again, draw and template the stories
//! 6. **Publish**: render the page and snapshot, then write both
//!
//! The clock and the override flag come in as arguments, so a build for a
//! given instant is reproducible.
//!
//! A failure after step 4 leaves the new image next to the previous page and
//! snapshot. The page and snapshot themselves are always replaced together.

use crate::error::MewsError;
use crate::gate::should_publish_at;
use crate::headlines::build_headlines;
use crate::models::BuildResult;
use crate::outputs::html::{PageContext, render_page};
use crate::outputs::json::render_snapshot;
use crate::outputs::{assets, publish_site};
use crate::rng::{Mulberry32, date_seed};
use crate::scrapers::{Fetch, reddit};
use chrono::{DateTime, Datelike, SecondsFormat};
use chrono_tz::Tz;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Time zone whose calendar and clock drive publishing.
pub const PUBLISH_TZ: Tz = chrono_tz::America::Los_Angeles;

/// Where to read from and write to.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub site_dir: PathBuf,
    pub feed_url: String,
    pub user_agent: String,
}

/// How a run ended, when it did not fail.
#[derive(Debug)]
pub enum Outcome {
    /// The gate refused; nothing was touched.
    Skipped,
    /// A new snapshot was published.
    Published(BuildResult),
}

/// Masthead timestamp, e.g. `Monday, January 1, 2024 • 6:00 AM PST`.
pub fn pretty_date(now: &DateTime<Tz>) -> String {
    now.format("%A, %B %-d, %Y • %-I:%M %p %Z").to_string()
}

/// Run one build at `now`.
#[instrument(level = "info", skip(config, fetcher), fields(site_dir = %config.site_dir.display()))]
pub async fn run(
    config: &BuildConfig,
    fetcher: &impl Fetch,
    now: DateTime<Tz>,
    force: bool,
) -> Result<Outcome, MewsError> {
    let tz = now.timezone().name();

    if !should_publish_at(&now, force) {
        info!(
            local_time = %now.format("%H:%M"),
            tz,
            "Outside the publishing hour; skipping update"
        );
        return Ok(Outcome::Skipped);
    }

    let date = now.date_naive().to_string();
    let seed = date_seed(&now);
    let mut rng = Mulberry32::new(seed);
    info!(%date, seed, force, "Building daily snapshot");

    let featured = reddit::find_featured(fetcher, &config.feed_url).await?;

    let image = fetcher.fetch_bytes(&featured.image_url).await?;
    assets::write_meme(&config.site_dir, &image).await?;

    let entries = reddit::fetch_entries(fetcher, &config.feed_url).await?;
    let headlines = build_headlines(&entries, &featured.title, &date, &mut rng);

    let result = BuildResult {
        updated_at: now.to_rfc3339_opts(SecondsFormat::Millis, false),
        tz: tz.to_string(),
        meme: featured,
        headlines,
    };

    let date_pretty = pretty_date(&now);
    let html = render_page(
        &result,
        PageContext {
            date_pretty: &date_pretty,
            year: now.year(),
        },
    );
    let json = render_snapshot(&result)?;
    publish_site(&config.site_dir, &html, &json).await?;

    info!(%date, tz, headlines = result.headlines.len(), "Updated site");
    Ok(Outcome::Published(result))
}
