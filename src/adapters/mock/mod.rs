//! Test doubles for the transport trait.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
