//! View state owned by the application, read by the UI.
//!
//! The UI renders from these types without reaching back into the fetch
//! core; it only reads the current state and asks for a retry.

pub mod stats_view;

pub use stats_view::{FetchState, StatsViewModel};
