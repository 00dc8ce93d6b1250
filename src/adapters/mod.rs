//! Concrete implementations of the transport trait.
//!
//! [`ReqwestHttpClient`] is the production adapter; the [`mock`] submodule
//! provides a configurable test double that records requests.

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
