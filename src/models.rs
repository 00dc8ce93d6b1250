//! Data models for repository statistics.
//!
//! [`RepoMetadataPayload`] mirrors the subset of the GitHub repository
//! endpoint the app consumes; [`RepositoryStats`] is the shaped display
//! record the UI renders.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Raw repository metadata as returned by the GitHub API.
///
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadataPayload {
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    /// Repository size in kilobytes
    pub size: u64,
    pub open_issues_count: u64,
    /// RFC 3339 timestamp of the last update
    pub updated_at: String,
}

/// Shaped repository statistics ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryStats {
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    /// Repository size rounded to the nearest megabyte
    pub size_megabytes: u64,
    pub open_issues: u64,
    /// Last update formatted as e.g. `Nov 20, 2025`
    pub last_updated_display: String,
}

impl RepositoryStats {
    /// Shape a raw payload into display form.
    ///
    /// Fails only if `updated_at` is not a valid RFC 3339 timestamp.
    pub fn from_payload(payload: &RepoMetadataPayload) -> Result<Self, chrono::ParseError> {
        let updated = DateTime::parse_from_rfc3339(&payload.updated_at)?;
        Ok(Self {
            stars: payload.stargazers_count,
            forks: payload.forks_count,
            watchers: payload.watchers_count,
            size_megabytes: megabytes_from_kilobytes(payload.size),
            open_issues: payload.open_issues_count,
            last_updated_display: format_short_date(&updated),
        })
    }
}

/// Convert kilobytes to megabytes, rounding to the nearest whole unit.
pub fn megabytes_from_kilobytes(kilobytes: u64) -> u64 {
    ((kilobytes as f64) / 1024.0).round() as u64
}

/// Format a timestamp as an abbreviated English date, e.g. `Nov 20, 2025`.
fn format_short_date(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> RepoMetadataPayload {
        RepoMetadataPayload {
            stargazers_count: 42,
            forks_count: 15,
            watchers_count: 42,
            size: 10240,
            open_issues_count: 3,
            updated_at: "2025-11-20T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_payload_deserialization_ignores_extra_fields() {
        let json = r#"{
            "id": 123,
            "full_name": "k1rta/repostats",
            "stargazers_count": 42,
            "forks_count": 15,
            "watchers_count": 42,
            "size": 10240,
            "open_issues_count": 3,
            "updated_at": "2025-11-20T12:00:00Z",
            "default_branch": "main"
        }"#;

        let payload: RepoMetadataPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.stargazers_count, 42);
        assert_eq!(payload.size, 10240);
        assert_eq!(payload.updated_at, "2025-11-20T12:00:00Z");
    }

    #[test]
    fn test_from_payload_shapes_stats() {
        let stats = RepositoryStats::from_payload(&sample_payload()).unwrap();
        assert_eq!(
            stats,
            RepositoryStats {
                stars: 42,
                forks: 15,
                watchers: 42,
                size_megabytes: 10,
                open_issues: 3,
                last_updated_display: "Nov 20, 2025".to_string(),
            }
        );
    }

    #[test]
    fn test_from_payload_rejects_bad_timestamp() {
        let mut payload = sample_payload();
        payload.updated_at = "yesterday".to_string();
        assert!(RepositoryStats::from_payload(&payload).is_err());
    }

    #[test]
    fn test_megabytes_rounding() {
        assert_eq!(megabytes_from_kilobytes(0), 0);
        assert_eq!(megabytes_from_kilobytes(1023), 1);
        assert_eq!(megabytes_from_kilobytes(1024), 1);
        assert_eq!(megabytes_from_kilobytes(1536), 2);
        assert_eq!(megabytes_from_kilobytes(511), 0);
        assert_eq!(megabytes_from_kilobytes(512), 1);
    }

    #[test]
    fn test_short_date_single_digit_day() {
        let payload = RepoMetadataPayload {
            updated_at: "2024-03-05T08:30:00+02:00".to_string(),
            ..sample_payload()
        };
        let stats = RepositoryStats::from_payload(&payload).unwrap();
        assert_eq!(stats.last_updated_display, "Mar 5, 2024");
    }
}
