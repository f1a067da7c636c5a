//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "todo-watch";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the todo API.
pub const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Cache Configuration
// =============================================================================

/// Cache settings for the todo dashboard.
pub mod cache {
    /// localStorage key of the cached todo list.
    pub const TODOS_KEY: &str = "todos";

    /// Lifetime of the cached todo list in seconds.
    pub const TODOS_EXPIRE_SECS: u64 = 2000;
}

// =============================================================================
// Dashboard Configuration
// =============================================================================

/// Todo dashboard behaviour.
pub mod dashboard {
    /// Todo selected when the dashboard opens.
    pub const INITIAL_TODO_ID: u32 = 197;

    /// Todo selected after fetching the current one fails.
    pub const FALLBACK_TODO_ID: u32 = 1;

    /// Interval at which the selected todo id is incremented.
    pub const POLL_INTERVAL_MS: u32 = 1000;

    /// Number of todos rendered from the full list.
    pub const VISIBLE_TODOS: usize = 5;
}

// =============================================================================
// Time Constants
// =============================================================================

/// Milliseconds per second.
pub const MS_PER_SECOND: f64 = 1000.0;
