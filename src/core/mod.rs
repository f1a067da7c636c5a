//! Core logic of the application.
//!
//! This module provides:
//! - [`fetch`] - The fetch-state controller and its cache policy
//! - [`storage`] - Session/persistent key-value stores behind a trait
//! - [`clock`] - Epoch-second clock used for cache expiry
//! - [`error`] - Error types shared across the crate

pub mod clock;
pub mod error;
pub mod fetch;
pub mod storage;

pub use error::{FetchError, StorageError};
pub use fetch::{CacheOptions, FetchController, FetchOptions, FetchState, Subscription, request};
