//! Command-line interface definitions for The Daily Mews.
//!
//! Every option can also be supplied through the environment, which is how the
//! scheduled job is usually configured.

use crate::gate;
use crate::pipeline::BuildConfig;
use crate::scrapers::DEFAULT_USER_AGENT;
use crate::scrapers::reddit::DEFAULT_FEED_URL;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Command-line arguments for the site builder.
///
/// # Examples
///
/// ```sh
/// # Hourly cron entry; only the 06:xx run in Los Angeles publishes
/// daily_mews --site-dir ./site
///
/// # Rebuild right now, whatever the hour
/// FORCE_UPDATE=1 daily_mews
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for index.html, data.json and assets/
    #[arg(short, long, env = "MEWS_SITE_DIR", default_value = "site")]
    pub site_dir: PathBuf,

    /// Atom feed to read trending posts from
    #[arg(long, env = "MEWS_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: Url,

    /// User agent sent with every request
    #[arg(long, env = "MEWS_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Set to "1" to publish regardless of the local hour
    #[arg(long, env = "FORCE_UPDATE")]
    pub force_update: Option<String>,
}

impl Cli {
    pub fn force(&self) -> bool {
        gate::is_forced(self.force_update.as_deref())
    }

    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            site_dir: self.site_dir.clone(),
            feed_url: self.feed_url.to_string(),
            user_agent: self.user_agent.clone(),
        }
    }
}
