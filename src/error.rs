//! Error taxonomy for a build run.
//!
//! Every variant is fatal: it is propagated to `main`, logged, and turns into a
//! non-zero exit code. Gate skips and malformed feed records are not errors and
//! never show up here.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure of a build run.
#[derive(Debug, Error)]
pub enum MewsError {
    /// The server answered, but not with a 2xx status.
    #[error("fetch failed {status} for {url}")]
    Status { status: u16, url: String },

    /// The request never produced a usable response (DNS, TLS, reset, body read).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client itself could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("filesystem operation on {} failed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MewsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MewsError::Io {
            path: path.into(),
            source,
        }
    }
}
