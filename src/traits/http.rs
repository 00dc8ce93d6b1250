//! HTTP client trait abstraction.
//!
//! The stats fetcher only ever issues GET requests, so the trait surface
//! is deliberately small. Implementations: [`crate::adapters::ReqwestHttpClient`]
//! for production and [`crate::adapters::mock::MockHttpClient`] for tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response with an empty header map.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    /// Connection failed (DNS, refused, reset)
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    /// The transport's own timeout fired
    #[error("request timed out: {0}")]
    Timeout(String),
    /// Other transport error
    #[error("http error: {0}")]
    Other(String),
}

/// Trait for the one HTTP operation the fetch core needs.
///
/// # Example
///
/// ```ignore
/// use repostats::traits::{Headers, HttpClient, HttpError, Response};
///
/// async fn fetch_json<C: HttpClient>(client: &C) -> Result<Response, HttpError> {
///     client.get("https://api.github.com/repos/o/r", &Headers::new()).await
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and await the full response body.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(Response::new(299, Bytes::new()).is_success());
        assert!(!Response::new(301, Bytes::new()).is_success());
        assert!(!Response::new(404, Bytes::new()).is_success());
        assert!(!Response::new(500, Bytes::new()).is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Payload {
            count: u64,
        }

        let response = Response::new(200, Bytes::from(r#"{"count":42}"#));
        let payload: Payload = response.json().unwrap();
        assert_eq!(payload, Payload { count: 42 });
    }

    #[test]
    fn test_response_json_malformed() {
        let response = Response::new(200, Bytes::from("not json"));
        assert!(response.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn test_response_with_headers() {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let response = Response::with_headers(200, headers, Bytes::from("{}"));
        assert_eq!(
            response.headers.get("content-type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "connection failed: refused"
        );
        assert_eq!(
            HttpError::Timeout("10s".to_string()).to_string(),
            "request timed out: 10s"
        );
        assert_eq!(
            HttpError::Other("tls".to_string()).to_string(),
            "http error: tls"
        );
    }
}
