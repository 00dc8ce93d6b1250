//! Runtime configuration for the stats client.
//!
//! The endpoint defaults to a fixed repository (like the template this
//! grew out of) but the owner/repo pair can be overridden via a CLI
//! argument or the `REPOSTATS_OWNER` / `REPOSTATS_REPO` environment
//! variables.

use std::time::Duration;

/// Default GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default repository owner.
pub const DEFAULT_OWNER: &str = "ratatui";

/// Default repository name.
pub const DEFAULT_REPO: &str = "ratatui";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for which repository to fetch and how.
#[derive(Debug, Clone)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// API base URL, overridable for tests
    pub api_base: String,
    /// Timeout applied to the whole fetch
    pub request_timeout: Duration,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl RepoConfig {
    /// Build a config from the environment, starting from defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(owner) = std::env::var("REPOSTATS_OWNER") {
            if !owner.is_empty() {
                config.owner = owner;
            }
        }
        if let Ok(repo) = std::env::var("REPOSTATS_REPO") {
            if !repo.is_empty() {
                config.repo = repo;
            }
        }
        config
    }

    /// Override owner and repo from an `owner/repo` slug.
    ///
    /// Returns `None` if the slug is not of the form `owner/repo`.
    pub fn with_slug(mut self, slug: &str) -> Option<Self> {
        let (owner, repo) = slug.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        self.owner = owner.to_string();
        self.repo = repo.to_string();
        Some(self)
    }

    /// Full URL of the repository metadata endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}/repos/{}/{}", self.api_base, self.owner, self.repo)
    }

    /// `owner/repo` slug for display.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
