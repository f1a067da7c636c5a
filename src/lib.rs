//! Browser UI that lists and polls todos from a remote API.
//!
//! The reusable piece is [`core::fetch`]: a fetch-state controller with
//! validation and an expiring session/persistent storage cache, bound to
//! Leptos signals by [`components::hooks::use_fetch`].

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
