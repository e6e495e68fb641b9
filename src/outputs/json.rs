//! JSON snapshot of a build.
//!
//! The [`BuildResult`] is pretty-printed with a trailing newline so the file
//! diffs cleanly when the site is committed to a repository.

use crate::error::MewsError;
use crate::models::BuildResult;

/// Serialize the snapshot exactly as it is written to `data.json`.
pub fn render_snapshot(result: &BuildResult) -> Result<String, MewsError> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}
