//! Feed access over HTTP.
//!
//! This module holds the plumbing shared by every fetch the build makes: a
//! `reqwest` client carrying a descriptive user agent, and two request helpers
//! that turn non-2xx answers into [`MewsError::Status`].
//!
//! The pipeline talks to the network through the [`Fetch`] trait, implemented
//! for real by [`HttpFetcher`], so a build can also be driven from canned
//! responses.
//!
//! # Submodules
//!
//! - [`reddit`]: extraction of entries and the featured item from the
//!   subreddit's Atom feed
//!
//! No retries happen here. A failed request fails the run, and the next
//! scheduled invocation is the retry.

pub mod reddit;

use crate::error::MewsError;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument};

/// User agent sent with every request. Some feed providers reject generic ones.
pub const DEFAULT_USER_AGENT: &str = "TheDailyMewsBot/1.0 (GitHub Actions)";

/// Source of remote documents and payloads.
pub trait Fetch {
    /// GET `url` and return the body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, MewsError>;

    /// GET `url` and return the raw body bytes.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, MewsError>;
}

/// [`Fetch`] over HTTP(S) with a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, MewsError> {
        Ok(Self {
            client: build_client(user_agent)?,
        })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, MewsError> {
        fetch_text(&self.client, url).await
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, MewsError> {
        fetch_bytes(&self.client, url).await
    }
}

/// Build the HTTP client used for the whole run.
pub fn build_client(user_agent: &str) -> Result<Client, MewsError> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(MewsError::Client)
}

async fn get_ok(client: &Client, url: &str) -> Result<Response, MewsError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| MewsError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MewsError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    debug!(%url, status = status.as_u16(), "Request succeeded");
    Ok(response)
}

/// GET `url` and return the body as text.
#[instrument(level = "info", skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, MewsError> {
    let body = get_ok(client, url)
        .await?
        .text()
        .await
        .map_err(|source| MewsError::Transport {
            url: url.to_string(),
            source,
        })?;
    info!(bytes = body.len(), "Fetched document");
    Ok(body)
}

/// GET `url` and return the raw body bytes.
#[instrument(level = "info", skip(client))]
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, MewsError> {
    let body = get_ok(client, url)
        .await?
        .bytes()
        .await
        .map_err(|source| MewsError::Transport {
            url: url.to_string(),
            source,
        })?;
    info!(bytes = body.len(), "Downloaded payload");
    Ok(body.to_vec())
}
