//! One-shot GitHub stats fetcher.
//!
//! Issues a single GET against the repository metadata endpoint and
//! shapes the response into a [`RepositoryStats`]. No internal retries;
//! the view-model decides when to try again.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::RepoConfig;
use crate::error::FetchError;
use crate::models::{RepoMetadataPayload, RepositoryStats};
use crate::traits::{Headers, HttpClient};

/// Fetches statistics for a single, fixed repository.
pub struct StatsFetcher {
    client: Arc<dyn HttpClient>,
    url: String,
    timeout: Duration,
}

impl StatsFetcher {
    /// Create a fetcher bound to the repository named in `config`.
    pub fn new(client: Arc<dyn HttpClient>, config: &RepoConfig) -> Self {
        Self {
            client,
            url: config.endpoint_url(),
            timeout: config.request_timeout,
        }
    }

    /// The endpoint this fetcher targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and shape the repository stats.
    ///
    /// Every failure mode (transport, deadline, bad status, malformed
    /// body or timestamp) surfaces as a [`FetchError`]; callers collapse
    /// it to the single user-facing message.
    pub async fn fetch(&self) -> Result<RepositoryStats, FetchError> {
        debug!(url = %self.url, "fetching repository stats");

        let mut headers = Headers::new();
        // GitHub requires a User-Agent and rejects requests without one
        headers.insert("User-Agent".to_string(), "repostats".to_string());
        headers.insert(
            "Accept".to_string(),
            "application/vnd.github+json".to_string(),
        );

        let response = tokio::time::timeout(self.timeout, self.client.get(&self.url, &headers))
            .await
            .map_err(|_| FetchError::DeadlineElapsed(self.timeout))?
            .inspect_err(|e| warn!(url = %self.url, error = %e, "transport failure"))?;

        if !response.is_success() {
            warn!(url = %self.url, status = response.status, "non-success status");
            return Err(FetchError::BadStatus(response.status));
        }

        let payload: RepoMetadataPayload = response.json()?;
        let stats = RepositoryStats::from_payload(&payload)?;

        debug!(
            stars = stats.stars,
            forks = stats.forks,
            "repository stats fetched"
        );
        Ok(stats)
    }
}
