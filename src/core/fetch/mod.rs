//! Fetch-state-and-cache primitive.
//!
//! - [`FetchController`] - Runs fetch cycles and publishes [`FetchState`]
//! - [`CacheAdapter`] - Envelope reads/writes with expiry and self-healing
//! - [`FetchOptions`], [`CacheOptions`] - Callbacks, validation and caching
//! - [`Subscription`] - Re-executes a controller when dependencies change

mod cache;
mod controller;
mod options;
mod state;
mod subscription;

pub use cache::{CacheAdapter, CacheEnvelope, CacheLookup, CacheMiss};
pub use controller::{FetchController, RequestFn, RequestFuture, StateListener, request};
pub use options::{CacheOptions, ErrorCallback, FetchOptions, SuccessCallback, TypeCheck};
pub use state::FetchState;
pub use subscription::Subscription;
