//! Utility modules for browser and network access.
//!
//! Provides:
//! - [`dom`] - Window, storage and URL hash helpers
//! - [`fetch_json`] - Network fetching with timeout

pub mod dom;
mod fetch;

pub use fetch::fetch_json;
