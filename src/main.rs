//! # The Daily Mews
//!
//! A scheduled job that turns a live subreddit feed into a once-daily static
//! page: a featured cat meme plus four satirical headlines built from whatever
//! is trending.
//!
//! ## Usage
//!
//! ```sh
//! daily_mews --site-dir ./site
//! FORCE_UPDATE=1 daily_mews
//! ```
//!
//! ## Architecture
//!
//! 1. **Gate**: only the run in the 06:xx hour (Los Angeles) publishes
//! 2. **Extraction**: tolerant, field-by-field parsing of the Atom feed
//! 3. **Selection**: date-seeded sampling, stable for a whole calendar day
//! 4. **Output**: `index.html`, `data.json` and `assets/daily-meme.jpg`

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod gate;
mod headlines;
mod models;
mod outputs;
mod pipeline;
mod rng;
mod scrapers;
mod selection;
mod utils;

use cli::Cli;
use pipeline::{Outcome, PUBLISH_TZ};
use scrapers::HttpFetcher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("daily_mews starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = args.build_config();
    let now = Utc::now().with_timezone(&PUBLISH_TZ);

    let fetcher = match HttpFetcher::new(&config.user_agent) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %e, "Could not initialise HTTP client");
            return Err(e.into());
        }
    };

    match pipeline::run(&config, &fetcher, now, args.force()).await {
        Ok(Outcome::Skipped) => {}
        Ok(Outcome::Published(result)) => {
            let elapsed = start_time.elapsed();
            info!(
                ?elapsed,
                meme = %result.meme.title,
                headlines = result.headlines.len(),
                "Execution complete"
            );
        }
        Err(e) => {
            error!(error = %e, "Build failed");
            return Err(e.into());
        }
    }

    Ok(())
}
