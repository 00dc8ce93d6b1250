//! repostats - a terminal client for live GitHub repository stats
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod utils;
pub mod view_state;
