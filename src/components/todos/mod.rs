//! Todo views.
//!
//! - [`TodoDashboard`] - Cached list and polled selected todo
//! - [`TodoItem`] - A single todo row
//! - [`TodoTitles`] - Uncached list of titles

mod dashboard;
mod item;
mod titles;

pub use dashboard::TodoDashboard;
pub use item::TodoItem;
pub use titles::TodoTitles;
