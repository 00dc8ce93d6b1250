//! Trait abstractions for dependency injection and testability.
//!
//! The fetch core talks to the network only through [`HttpClient`], so
//! tests can substitute a mock transport without touching the state
//! machine.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
