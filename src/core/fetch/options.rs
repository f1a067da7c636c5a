//! Per-invocation configuration of a fetch cycle.

use std::fmt;
use std::rc::Rc;

use crate::core::error::FetchError;
use crate::core::storage::StorageScope;

/// Called with the accepted value after a successful cycle.
pub type SuccessCallback<T> = Rc<dyn Fn(&T)>;

/// Called once per failed cycle, before the error is published.
pub type ErrorCallback = Rc<dyn Fn(&FetchError)>;

/// Validation predicate applied to fresh and cached values alike.
pub type TypeCheck<T> = Rc<dyn Fn(&T) -> bool>;

/// Cache settings for a fetch.
///
/// Nothing is read from or written to storage unless `cache_result` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// Enables cache reads and writes.
    pub cache_result: bool,
    /// Storage key of the cache entry.
    pub cache_key: String,
    /// Lifetime of a written entry in seconds. `None` never expires.
    pub cache_expire_time: Option<u64>,
    /// Use persistent (`localStorage`) instead of session storage.
    pub use_local_storage: bool,
}

impl CacheOptions {
    /// Cache settings for `key`. Caching stays off until
    /// [`cache_result`](Self::cache_result) is enabled.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            cache_result: false,
            cache_key: key.into(),
            cache_expire_time: None,
            use_local_storage: false,
        }
    }

    pub fn cache_result(mut self, enabled: bool) -> Self {
        self.cache_result = enabled;
        self
    }

    pub fn expire_after(mut self, seconds: u64) -> Self {
        self.cache_expire_time = Some(seconds);
        self
    }

    pub fn use_local_storage(mut self, enabled: bool) -> Self {
        self.use_local_storage = enabled;
        self
    }

    /// The single backend this configuration uses.
    pub fn scope(&self) -> StorageScope {
        if self.use_local_storage {
            StorageScope::Persistent
        } else {
            StorageScope::Session
        }
    }
}

/// Optional callbacks, validation and caching for a fetch.
pub struct FetchOptions<T> {
    pub(crate) on_success: Option<SuccessCallback<T>>,
    pub(crate) on_error: Option<ErrorCallback>,
    pub(crate) type_check: Option<TypeCheck<T>>,
    pub(crate) cache: Option<CacheOptions>,
}

impl<T> FetchOptions<T> {
    pub fn new() -> Self {
        Self {
            on_success: None,
            on_error: None,
            type_check: None,
            cache: None,
        }
    }

    pub fn on_success(mut self, f: impl Fn(&T) + 'static) -> Self {
        self.on_success = Some(Rc::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&FetchError) + 'static) -> Self {
        self.on_error = Some(Rc::new(f));
        self
    }

    pub fn type_check(mut self, f: impl Fn(&T) -> bool + 'static) -> Self {
        self.type_check = Some(Rc::new(f));
        self
    }

    pub fn cache(mut self, cache: CacheOptions) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Key of the cache entry, whether or not caching is enabled.
    pub fn cache_key(&self) -> Option<&str> {
        self.cache.as_ref().map(|c| c.cache_key.as_str())
    }

    /// Whether cache reads and writes are enabled.
    pub fn caching_enabled(&self) -> bool {
        self.cache.as_ref().is_some_and(|c| c.cache_result)
    }

    /// Runs the type check. Values always pass when none is configured.
    pub fn accepts(&self, value: &T) -> bool {
        self.type_check.as_ref().is_none_or(|check| check(value))
    }
}

impl<T> Default for FetchOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FetchOptions<T> {
    fn clone(&self) -> Self {
        Self {
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
            type_check: self.type_check.clone(),
            cache: self.cache.clone(),
        }
    }
}

impl<T> fmt::Debug for FetchOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("type_check", &self.type_check.is_some())
            .field("cache", &self.cache)
            .finish()
    }
}
