//! Observable state of a fetch.

use crate::core::error::FetchError;

/// Result, error and loading flag of a fetch.
///
/// While `loading` is true the previous cycle's `result` or `error` is
/// still present; it is replaced only when the new cycle resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub result: Option<T>,
    pub error: Option<FetchError>,
    pub loading: bool,
}

impl<T> FetchState<T> {
    pub fn idle() -> Self {
        Self {
            result: None,
            error: None,
            loading: false,
        }
    }

    pub(crate) fn succeeded(value: T) -> Self {
        Self {
            result: Some(value),
            error: None,
            loading: false,
        }
    }

    pub(crate) fn failed(error: FetchError) -> Self {
        Self {
            result: None,
            error: Some(error),
            loading: false,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::idle()
    }
}
