//! Small text and filesystem helpers.
//!
//! - XML entity unescaping for feed fields
//! - Title normalisation and the image-URL heuristic
//! - Log-friendly truncation
//! - Directory creation and staged (write-then-rename) file output

use crate::error::MewsError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument, warn};

static IMAGE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(png|jpe?g|gif|webp)(\?.*)?$").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Replace the five standard XML entities.
///
/// `&amp;` goes first, so a double-escaped `&amp;lt;` from embedded HTML comes
/// out as `<`. Anything else that looks like an entity is left alone.
pub fn unescape_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_title(s: &str) -> String {
    WHITESPACE_RE.replace_all(s, " ").trim().to_string()
}

/// Does the URL end in a known image extension (optionally with a query)?
pub fn is_likely_image_url(url: &str) -> bool {
    IMAGE_URL_RE.is_match(url)
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut after `max` characters with an ellipsis and the number
/// of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Create `path` and all missing parents.
pub async fn ensure_dir(path: &Path) -> Result<(), MewsError> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| MewsError::io(path, e))
}

/// Create the parent directory of `path` if it has one.
pub async fn ensure_parent_dir(path: &Path) -> Result<(), MewsError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent).await,
        _ => Ok(()),
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

/// Sibling path used while a file is being written.
pub fn staging_path(path: &Path) -> PathBuf {
    sibling_with_suffix(path, ".tmp")
}

/// Sibling path holding the previous copy of a file while it is replaced.
pub fn backup_path(path: &Path) -> PathBuf {
    sibling_with_suffix(path, ".bak")
}

/// Write `contents` to a `.tmp` sibling of `path`. Returns the staging path.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn stage_file(path: &Path, contents: &[u8]) -> Result<PathBuf, MewsError> {
    ensure_parent_dir(path).await?;
    let staged = staging_path(path);
    fs::write(&staged, contents)
        .await
        .map_err(|e| MewsError::io(&staged, e))?;
    debug!(staged = %staged.display(), bytes = contents.len(), "Staged file");
    Ok(staged)
}

/// Move a staged file into its final place, replacing what was there.
pub async fn commit_staged(staged: &Path, path: &Path) -> Result<(), MewsError> {
    fs::rename(staged, path)
        .await
        .map_err(|e| MewsError::io(path, e))
}

/// Remove a leftover staging or backup file. A missing file is fine.
pub async fn discard_file(path: &Path) {
    match fs::remove_file(path).await {
        Ok(()) => debug!(path = %path.display(), "Removed leftover file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "Could not remove leftover file"),
    }
}
