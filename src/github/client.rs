use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use tracing::debug;

use super::activity::{EventSource, LookupError};
use super::models::RawEvent;

/// Unauthenticated client for the GitHub REST API.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
    per_page: u8,
}

impl GithubClient {
    pub fn new(api_url: &str, per_page: u8, timeout: Duration) -> Result<Self> {
        if !api_url.starts_with("https://") {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }
        let api_url = Url::parse(api_url)
            .with_context(|| format!("Invalid GitHub API URL: {}", api_url))?;
        if api_url.cannot_be_a_base() {
            bail!("GitHub API URL cannot take a path: {}", api_url);
        }

        let client = Client::builder()
            .user_agent("termfolio")
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url,
            per_page,
        })
    }

    /// `{api_url}/users/{username}/events/public?per_page={n}`, with the
    /// username percent-encoded as a single path segment.
    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["users", username, "events", "public"]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("per_page", &self.per_page.to_string());
        url
    }
}

impl EventSource for GithubClient {
    async fn public_events(&self, username: &str) -> Result<Vec<RawEvent>, LookupError> {
        let url = self.events_url(username);
        debug!(url = %url, "Fetching public events");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = resp.bytes().await?;
        let events = parse_events(&body)?;
        debug!(user = username, count = events.len(), "Fetched public events");
        Ok(events)
    }
}

/// Decode a raw `/events/public` response body.
pub fn parse_events(body: &[u8]) -> Result<Vec<RawEvent>, LookupError> {
    Ok(serde_json::from_slice(body)?)
}
