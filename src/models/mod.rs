//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Todo`] - Records served by the todo API, with validators
//! - [`Route`] - Hash-based navigation

mod route;
mod todo;

pub use route::Route;
pub use todo::{Todo, is_a_todo, is_an_array_of_todos};
