//! Cache adapter: reads, writes and invalidates the stored envelope of a fetch.
//!
//! An entry is stored as JSON `{"result": <T>, "expires": <epoch seconds>}`
//! under the configured key, with `expires` omitted for entries that never
//! expire. Anything wrong with a stored entry (unparseable, rejected by the
//! type check, expired) is a miss, and the entry is removed so the next read
//! does not trip over it again.

use leptos::logging::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::options::{CacheOptions, FetchOptions};
use crate::core::clock::Clock;
use crate::core::error::StorageError;
use crate::core::storage::{KeyValueStore, Stores};

/// Persisted form of a cached result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope<T> {
    pub result: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<u64>,
}

impl<T> CacheEnvelope<T> {
    /// Whether the entry is past its expiry at `now` (epoch seconds).
    pub fn is_expired(&self, now: u64) -> bool {
        self.expires.is_some_and(|expires| expires < now)
    }
}

/// Why a lookup did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheMiss {
    #[error("caching disabled")]
    Disabled,
    #[error("no cached entry for key {0}")]
    Empty(String),
    #[error("failed to parse cached entry for key {key}: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("data stored in cache for key {0} failed typecheck")]
    Rejected(String),
    #[error("cache for key {key} expired at {expires}")]
    Expired { key: String, expires: u64 },
}

impl CacheMiss {
    /// Whether the miss was caused by a bad stored entry (and removed it).
    pub fn invalidated(&self) -> bool {
        matches!(
            self,
            Self::Corrupt { .. } | Self::Rejected(_) | Self::Expired { .. }
        )
    }
}

/// Outcome of [`CacheAdapter::lookup`].
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss(CacheMiss),
}

impl<T> CacheLookup<T> {
    pub fn hit(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss(_) => None,
        }
    }
}

/// Cache operations for one fetch configuration.
pub struct CacheAdapter<'a, T> {
    options: &'a FetchOptions<T>,
    stores: &'a Stores,
    clock: &'a dyn Clock,
}

impl<'a, T> CacheAdapter<'a, T> {
    pub fn new(options: &'a FetchOptions<T>, stores: &'a Stores, clock: &'a dyn Clock) -> Self {
        Self {
            options,
            stores,
            clock,
        }
    }

    /// Cache settings, only when caching is enabled.
    fn enabled(&self) -> Option<&'a CacheOptions> {
        self.options.cache.as_ref().filter(|c| c.cache_result)
    }

    fn store_for(&self, cache: &CacheOptions) -> std::rc::Rc<dyn KeyValueStore> {
        self.stores.get(cache.scope())
    }

    /// Remove the entry for the configured key.
    ///
    /// Works whether or not caching is enabled; a no-op without cache
    /// options.
    pub fn invalidate(&self) -> Result<(), StorageError> {
        match self.options.cache.as_ref() {
            Some(cache) => self.store_for(cache).remove_item(&cache.cache_key),
            None => Ok(()),
        }
    }

    /// Remove the entry, logging rather than failing.
    fn invalidate_logged(&self) {
        if let Err(e) = self.invalidate() {
            warn!("fetch cache: {}", e);
        }
    }
}

impl<T> CacheAdapter<'_, T>
where
    T: DeserializeOwned,
{
    /// Read a valid cached value.
    pub fn lookup(&self) -> CacheLookup<T> {
        let Some(cache) = self.enabled() else {
            return CacheLookup::Miss(CacheMiss::Disabled);
        };
        let key = cache.cache_key.as_str();

        let Some(raw) = self.store_for(cache).get_item(key) else {
            return CacheLookup::Miss(CacheMiss::Empty(key.to_string()));
        };

        let miss = match serde_json::from_str::<CacheEnvelope<T>>(&raw) {
            Err(e) => CacheMiss::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            },
            Ok(envelope) if !self.options.accepts(&envelope.result) => {
                CacheMiss::Rejected(key.to_string())
            }
            Ok(envelope) if envelope.is_expired(self.clock.now_seconds()) => CacheMiss::Expired {
                key: key.to_string(),
                expires: envelope.expires.unwrap_or_default(),
            },
            Ok(envelope) => return CacheLookup::Hit(envelope.result),
        };

        self.invalidate_logged();
        warn!("fetch cache: {}, re-fetching item", miss);
        CacheLookup::Miss(miss)
    }
}

impl<T> CacheAdapter<'_, T>
where
    T: Serialize,
{
    /// Write `value` under the configured key, overwriting any previous
    /// entry. Does nothing unless caching is enabled.
    pub fn store(&self, value: &T) -> Result<(), StorageError> {
        let Some(cache) = self.enabled() else {
            return Ok(());
        };

        let envelope = CacheEnvelope {
            result: value,
            expires: cache
                .cache_expire_time
                .map(|ttl| self.clock.now_seconds().saturating_add(ttl)),
        };
        let json = serde_json::to_string(&envelope)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        self.store_for(cache).set_item(&cache.cache_key, &json)
    }
}
