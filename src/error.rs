//! Error types for the fetch core.
//!
//! Internally the causes stay distinguishable for diagnostics; at the
//! view-model boundary they all collapse to one user-facing message, so
//! the UI only ever shows a single failure string and a retry action.

use std::time::Duration;

use crate::traits::HttpError;

/// The static message shown to the user for any fetch failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load repository stats";

/// A failed stats fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, reset, transport timeout)
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The explicit fetch deadline elapsed
    #[error("fetch timed out after {0:?}")]
    DeadlineElapsed(Duration),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    BadStatus(u16),

    /// The body did not parse as the expected payload
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The `updated_at` field did not parse as a timestamp
    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(#[from] chrono::ParseError),
}

impl FetchError {
    /// The user-facing message. Identical for every variant by design;
    /// the cause is only surfaced through logs.
    pub fn user_message(&self) -> String {
        FETCH_FAILED_MESSAGE.to_string()
    }
}
