//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing and navigation bar (main entry point)
//! - [`hooks`] - [`use_fetch`](hooks::use_fetch), the reactive fetch binding
//! - [`todos`] - Todo dashboard, item and title list
//! - [`faq`] - Static FAQ page

pub mod faq;
pub mod hooks;
pub mod router;
pub mod todos;

pub use router::AppRouter;
