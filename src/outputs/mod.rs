//! Artifact generation: the page, the JSON snapshot, and the meme image.
//!
//! # Submodules
//!
//! - [`html`]: renders the page from a [`BuildResult`](crate::models::BuildResult)
//! - [`json`]: serializes the snapshot
//! - [`assets`]: stores the downloaded meme image
//!
//! # Output Structure
//!
//! ```text
//! site/
//! ├── index.html
//! ├── data.json
//! └── assets/
//!     └── daily-meme.jpg
//! ```
//!
//! The page and snapshot are published together by [`publish_site`]: both are
//! staged next to their targets and only renamed into place once both staged
//! writes succeeded. The previous `index.html` is held as `index.html.bak`
//! until `data.json` is in place, and restored if that last rename fails.

pub mod assets;
pub mod html;
pub mod json;

use crate::error::MewsError;
use crate::utils::{backup_path, commit_staged, discard_file, stage_file};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

pub const INDEX_FILE: &str = "index.html";
pub const DATA_FILE: &str = "data.json";

pub fn index_path(site_dir: &Path) -> PathBuf {
    site_dir.join(INDEX_FILE)
}

pub fn data_path(site_dir: &Path) -> PathBuf {
    site_dir.join(DATA_FILE)
}

/// Write `index.html` and `data.json` into `site_dir`, replacing old copies.
///
/// On error the previous page is left in place and no `.tmp` or `.bak`
/// files remain.
#[instrument(level = "info", skip(html, json), fields(site_dir = %site_dir.display()))]
pub async fn publish_site(site_dir: &Path, html: &str, json: &str) -> Result<(), MewsError> {
    let index = index_path(site_dir);
    let data = data_path(site_dir);

    let staged_index = stage_file(&index, html.as_bytes()).await?;
    let staged_data = match stage_file(&data, json.as_bytes()).await {
        Ok(staged) => staged,
        Err(e) => {
            discard_file(&staged_index).await;
            return Err(e);
        }
    };

    let backup = if index.exists() {
        let backup = backup_path(&index);
        if let Err(e) = commit_staged(&index, &backup).await {
            discard_file(&staged_index).await;
            discard_file(&staged_data).await;
            return Err(e);
        }
        Some(backup)
    } else {
        None
    };

    if let Err(e) = commit_staged(&staged_index, &index).await {
        restore_previous(&index, backup.as_deref()).await;
        discard_file(&staged_index).await;
        discard_file(&staged_data).await;
        return Err(e);
    }

    if let Err(e) = commit_staged(&staged_data, &data).await {
        warn!(error = %e, "Snapshot rename failed, restoring previous page");
        restore_previous(&index, backup.as_deref()).await;
        discard_file(&staged_data).await;
        return Err(e);
    }

    if let Some(backup) = &backup {
        discard_file(backup).await;
    }

    info!(index = %index.display(), data = %data.display(), "Published site");
    Ok(())
}

/// Put the backed-up page back, or remove the new one if there was none.
async fn restore_previous(index: &Path, backup: Option<&Path>) {
    match backup {
        Some(backup) => {
            if let Err(e) = commit_staged(backup, index).await {
                warn!(error = %e, backup = %backup.display(), "Could not restore previous page");
            }
        }
        None => discard_file(index).await,
    }
}
