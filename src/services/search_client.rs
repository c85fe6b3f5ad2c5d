use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::SearchSettings;
use crate::models::SearchResultItem;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Google API not configured. Set GOOGLE_API_KEY and GOOGLE_CX.")]
    NotConfigured,
    #[error("Search API returned {status}: {body}")]
    Upstream { status: u16, body: String },
    /// Network-level failures (timeout, DNS, refused connection) share the
    /// error channel with upstream failures instead of aborting the request.
    #[error("Search request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type SearchOutcome = Result<Vec<SearchResultItem>, SearchError>;

/// Seam between the dispatcher and the actual HTTP client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str, num: u32) -> SearchOutcome;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResultItem>,
}

#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    settings: SearchSettings,
}

impl SearchClient {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    /// One GET per invocation, no retries. Credentials are checked before
    /// any network I/O.
    async fn search(&self, query: &str, num: u32) -> SearchOutcome {
        if !self.settings.is_configured() {
            return Err(SearchError::NotConfigured);
        }

        debug!(query, num, "issuing search request");
        let response = self
            .http
            .get(&self.settings.endpoint)
            .query(&[
                ("key", self.settings.api_key.as_str()),
                ("cx", self.settings.engine_id.as_str()),
                ("q", query),
                ("num", &num.to_string()),
            ])
            .timeout(Duration::from_secs(self.settings.timeout_secs))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SearchResponse = response.json().await?;
        Ok(payload.items)
    }
}
