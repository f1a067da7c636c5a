//! Key-value storage backends for the fetch cache.
//!
//! The cache never talks to `window.sessionStorage` / `window.localStorage`
//! directly. It goes through [`KeyValueStore`], so the same code runs
//! against the browser and against [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::warn;

use crate::core::error::StorageError;
use crate::utils::dom;

/// String key-value storage with the Web Storage surface.
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// Browser Storage
// =============================================================================

/// Wrapper around a browser `Storage` object.
#[derive(Clone)]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// `window.sessionStorage`, cleared when the tab is closed.
    pub fn session() -> Option<Self> {
        dom::session_storage().map(|storage| Self { storage })
    }

    /// `window.localStorage`, persisted across sessions.
    pub fn local() -> Option<Self> {
        dom::local_storage().map(|storage| Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed(key.to_string()))
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// In-memory store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// Scoped Store Pair
// =============================================================================

/// Lifetime of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageScope {
    /// Cleared when the browser session ends.
    #[default]
    Session,
    /// Survives browser restarts.
    Persistent,
}

/// The session-scoped and persistent stores available to the cache.
#[derive(Clone)]
pub struct Stores {
    session: Rc<dyn KeyValueStore>,
    persistent: Rc<dyn KeyValueStore>,
}

impl Stores {
    pub fn new(session: Rc<dyn KeyValueStore>, persistent: Rc<dyn KeyValueStore>) -> Self {
        Self {
            session,
            persistent,
        }
    }

    /// Browser session/local storage.
    ///
    /// Falls back to an in-memory store for a scope whose browser storage is
    /// unavailable (e.g. storage disabled by privacy settings).
    pub fn browser() -> Self {
        let session: Rc<dyn KeyValueStore> = match BrowserStore::session() {
            Some(store) => Rc::new(store),
            None => {
                warn!("sessionStorage unavailable, caching in memory");
                Rc::new(MemoryStore::new())
            }
        };
        let persistent: Rc<dyn KeyValueStore> = match BrowserStore::local() {
            Some(store) => Rc::new(store),
            None => {
                warn!("localStorage unavailable, caching in memory");
                Rc::new(MemoryStore::new())
            }
        };
        Self::new(session, persistent)
    }

    /// Two independent in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()), Rc::new(MemoryStore::new()))
    }

    /// The store for `scope`.
    pub fn get(&self, scope: StorageScope) -> Rc<dyn KeyValueStore> {
        match scope {
            StorageScope::Session => Rc::clone(&self.session),
            StorageScope::Persistent => Rc::clone(&self.persistent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("a"), None);

        store.set_item("a", "1").unwrap();
        store.set_item("a", "2").unwrap();
        assert_eq!(store.get_item("a"), Some("2".to_string()));
        assert_eq!(store.len(), 1);

        store.remove_item("a").unwrap();
        store.remove_item("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_item("k", "v").unwrap();
        assert!(other.contains_key("k"));
    }

    #[test]
    fn test_stores_keep_scopes_apart() {
        let session = MemoryStore::new();
        let persistent = MemoryStore::new();
        let stores = Stores::new(Rc::new(session.clone()), Rc::new(persistent.clone()));

        stores
            .get(StorageScope::Persistent)
            .set_item("todos", "[]")
            .unwrap();

        assert!(persistent.contains_key("todos"));
        assert!(session.is_empty());
        assert_eq!(stores.get(StorageScope::Session).get_item("todos"), None);
    }
}
