//! Storage of the downloaded meme image.

use crate::error::MewsError;
use crate::utils::ensure_parent_dir;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Path of the image relative to the site root, as referenced by the page.
///
/// Always `.jpg`, whatever the source format; browsers sniff the real type.
pub const MEME_ASSET: &str = "assets/daily-meme.jpg";

pub fn meme_path(site_dir: &Path) -> PathBuf {
    site_dir.join(MEME_ASSET)
}

/// Write the image bytes verbatim, creating `assets/` if needed.
#[instrument(level = "info", skip(bytes), fields(bytes = bytes.len()))]
pub async fn write_meme(site_dir: &Path, bytes: &[u8]) -> Result<PathBuf, MewsError> {
    let path = meme_path(site_dir);
    ensure_parent_dir(&path).await?;
    fs::write(&path, bytes)
        .await
        .map_err(|e| MewsError::io(&path, e))?;
    info!(path = %path.display(), "Saved meme image");
    Ok(path)
}
