//! Fetch-state controller: runs fetch cycles and publishes their state.
//!
//! One cycle:
//! 1. publish `loading = true` (previous result/error stay visible)
//! 2. on a cache hit, call `on_success` and publish the cached value
//! 3. otherwise await the request, validate it, call the callbacks,
//!    write the cache and publish the outcome
//!
//! Every `execute()` takes a new sequence number. A response that comes
//! back after a newer cycle has started is dropped without touching state,
//! callbacks or the cache.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::logging::{error, log, warn};
use serde::{Serialize, de::DeserializeOwned};

use super::cache::CacheAdapter;
use super::options::FetchOptions;
use super::state::FetchState;
use crate::core::clock::{Clock, SystemClock};
use crate::core::error::FetchError;
use crate::core::storage::Stores;

/// Future produced by a request.
pub type RequestFuture<T> = Pin<Box<dyn Future<Output = Result<T, FetchError>>>>;

/// Zero-argument asynchronous request.
pub type RequestFn<T> = Rc<dyn Fn() -> RequestFuture<T>>;

/// Called after every state change.
pub type StateListener<T> = Rc<dyn Fn(&FetchState<T>)>;

/// Wrap an async closure as a [`RequestFn`].
pub fn request<T, F, Fut>(f: F) -> RequestFn<T>
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    Rc::new(move || Box::pin(f()) as RequestFuture<T>)
}

struct Inner<T> {
    request: RequestFn<T>,
    options: FetchOptions<T>,
    stores: Stores,
    clock: Rc<dyn Clock>,
    state: RefCell<FetchState<T>>,
    listeners: RefCell<Vec<StateListener<T>>>,
    sequence: Cell<u64>,
}

/// Owns the state of one fetch. Clones share it.
pub struct FetchController<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for FetchController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> FetchController<T> {
    /// Controller backed by browser storage and the system clock.
    pub fn new(request: RequestFn<T>, options: FetchOptions<T>) -> Self {
        Self::with_backends(request, options, Stores::browser(), Rc::new(SystemClock))
    }

    pub fn with_backends(
        request: RequestFn<T>,
        options: FetchOptions<T>,
        stores: Stores,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                request,
                options,
                stores,
                clock,
                state: RefCell::new(FetchState::idle()),
                listeners: RefCell::new(Vec::new()),
                sequence: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.inner.state.borrow().clone()
    }

    /// Register a listener called with every published state.
    pub fn subscribe(&self, listener: impl Fn(&FetchState<T>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Remove the cache entry for the configured key, if any.
    pub fn invalidate_cache(&self) {
        if let Err(e) = self.cache().invalidate() {
            warn!("fetch: failed to invalidate cache: {}", e);
        }
    }

    fn cache(&self) -> CacheAdapter<'_, T> {
        CacheAdapter::new(
            &self.inner.options,
            &self.inner.stores,
            self.inner.clock.as_ref(),
        )
    }

    fn publish(&self, update: impl FnOnce(&mut FetchState<T>)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            update(&mut state);
            state.clone()
        };
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn is_current(&self, sequence: u64) -> bool {
        self.inner.sequence.get() == sequence
    }

    fn succeed(&self, value: T) {
        if let Some(on_success) = &self.inner.options.on_success {
            on_success(&value);
        }
        self.publish(|state| *state = FetchState::succeeded(value));
    }

    fn fail(&self, err: FetchError) {
        if let Some(on_error) = &self.inner.options.on_error {
            on_error(&err);
        }
        self.publish(|state| *state = FetchState::failed(err));
    }
}

impl<T> FetchController<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    /// Run one fetch cycle. Failures end up in the published state.
    pub async fn execute(&self) {
        let sequence = self.inner.sequence.get() + 1;
        self.inner.sequence.set(sequence);

        self.publish(|state| state.loading = true);

        if let Some(value) = self.cache().lookup().hit() {
            self.succeed(value);
            return;
        }

        let outcome = (self.inner.request)().await;

        if !self.is_current(sequence) {
            log!("fetch: dropping response of superseded request #{}", sequence);
            return;
        }

        match outcome.and_then(|value| self.validate(value)) {
            Ok(value) => {
                if let Some(on_success) = &self.inner.options.on_success {
                    on_success(&value);
                }
                if let Err(e) = self.cache().store(&value) {
                    error!("fetch: failed to cache result: {}", e);
                }
                self.publish(|state| *state = FetchState::succeeded(value));
            }
            Err(err) => self.fail(err),
        }
    }

    fn validate(&self, value: T) -> Result<T, FetchError> {
        if self.inner.options.accepts(&value) {
            return Ok(value);
        }
        self.invalidate_cache();
        Err(FetchError::Validation {
            key: self.inner.options.cache_key().map(String::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::fetch::CacheOptions;
    use crate::core::storage::{KeyValueStore, MemoryStore};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Todo {
        id: u32,
        title: String,
        #[serde(rename = "userId")]
        user_id: u32,
    }

    fn todo(id: u32) -> Todo {
        Todo {
            id,
            title: "x".to_string(),
            user_id: 1,
        }
    }

    struct Harness<T> {
        controller: FetchController<T>,
        session: MemoryStore,
        clock: ManualClock,
        calls: Rc<Cell<u32>>,
    }

    /// Controller whose request returns `respond(call_number)`.
    fn harness<T>(
        options: FetchOptions<T>,
        respond: impl Fn(u32) -> Result<T, FetchError> + 'static,
    ) -> Harness<T>
    where
        T: Clone + 'static,
    {
        let session = MemoryStore::new();
        let stores = Stores::new(Rc::new(session.clone()), Rc::new(MemoryStore::new()));
        let clock = ManualClock::at(0);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let respond = Rc::new(respond);
        let req = request(move || {
            counter.set(counter.get() + 1);
            let outcome = respond(counter.get());
            async move { outcome }
        });
        Harness {
            controller: FetchController::with_backends(req, options, stores, Rc::new(clock.clone())),
            session,
            clock,
            calls,
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let c = Rc::new(Cell::new(0));
        (Rc::clone(&c), c)
    }

    #[tokio::test]
    async fn test_success_without_options() {
        let h = harness(FetchOptions::new(), |_| Ok(todo(1)));
        assert_eq!(h.controller.state(), FetchState::idle());

        h.controller.execute().await;

        assert_eq!(
            h.controller.state(),
            FetchState {
                result: Some(todo(1)),
                error: None,
                loading: false,
            }
        );
        assert!(h.session.is_empty());
    }

    #[tokio::test]
    async fn test_failure_calls_on_error_once() {
        let (errors, seen) = counter();
        let opts = FetchOptions::<Todo>::new().on_error(move |_| errors.set(errors.get() + 1));
        let h = harness(opts, |_| Err(FetchError::other("boom")));

        h.controller.execute().await;

        assert_eq!(
            h.controller.state(),
            FetchState {
                result: None,
                error: Some(FetchError::other("boom")),
                loading: false,
            }
        );
        assert_eq!(seen.get(), 1);
        assert_eq!(h.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_rejected_value_fails_and_invalidates() {
        let (errors, seen) = counter();
        let (successes, succeeded) = counter();
        let opts = FetchOptions::<Todo>::new()
            .type_check(|t| t.id > 0)
            .on_error(move |_| errors.set(errors.get() + 1))
            .on_success(move |_| successes.set(successes.get() + 1))
            .cache(CacheOptions::new("todo"));
        let h = harness(opts, |_| Ok(todo(0)));
        h.session.set_item("todo", "stale").unwrap();

        h.controller.execute().await;

        let state = h.controller.state();
        assert_eq!(state.result, None);
        assert_eq!(
            state.error,
            Some(FetchError::Validation {
                key: Some("todo".to_string())
            })
        );
        assert!(!state.loading);
        assert_eq!(seen.get(), 1);
        assert_eq!(succeeded.get(), 0);
        assert!(!h.session.contains_key("todo"));
    }

    #[tokio::test]
    async fn test_rejected_value_is_never_cached() {
        let (errors, seen) = counter();
        let (successes, succeeded) = counter();
        let session = MemoryStore::new();
        let writer = session.clone();
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        // Another tab stores a valid entry while the request is in flight.
        let req = request(move || {
            counter.set(counter.get() + 1);
            writer
                .set_item("todo", &json!({"result": {"id": 1, "title": "x", "userId": 1}}).to_string())
                .unwrap();
            async { Ok(todo(0)) }
        });
        let opts = FetchOptions::<Todo>::new()
            .type_check(|t| t.id > 0)
            .on_error(move |_| errors.set(errors.get() + 1))
            .on_success(move |_| successes.set(successes.get() + 1))
            .cache(CacheOptions::new("todo").cache_result(true));
        let controller = FetchController::with_backends(
            req,
            opts,
            Stores::new(Rc::new(session.clone()), Rc::new(MemoryStore::new())),
            Rc::new(ManualClock::at(0)),
        );

        controller.execute().await;

        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), 1);
        assert_eq!(succeeded.get(), 0);
        assert_eq!(
            controller.state(),
            FetchState::failed(FetchError::Validation {
                key: Some("todo".to_string())
            })
        );
        assert!(!session.contains_key("todo"));
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn test_success_is_cached_and_served_from_cache() {
        let (successes, succeeded) = counter();
        let opts = FetchOptions::<Todo>::new()
            .on_success(move |_| successes.set(successes.get() + 1))
            .cache(CacheOptions::new("todo").cache_result(true));
        let h = harness(opts, |n| Ok(todo(n)));

        h.controller.execute().await;
        let raw = h.session.get_item("todo").unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&raw).unwrap(),
            json!({"result": {"id": 1, "title": "x", "userId": 1}})
        );

        h.controller.execute().await;

        assert_eq!(h.calls.get(), 1);
        assert_eq!(succeeded.get(), 2);
        assert_eq!(h.controller.state().result, Some(todo(1)));
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_refetch() {
        let opts = FetchOptions::<Todo>::new()
            .cache(CacheOptions::new("todo").cache_result(true).expire_after(10));
        let h = harness(opts, |n| Ok(todo(n)));

        h.controller.execute().await;
        h.clock.set(5);
        h.controller.execute().await;
        assert_eq!(h.calls.get(), 1);

        h.clock.set(11);
        h.controller.execute().await;
        assert_eq!(h.calls.get(), 2);
        assert_eq!(h.controller.state().result, Some(todo(2)));

        let raw = h.session.get_item("todo").unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&raw).unwrap()["expires"],
            json!(21)
        );
    }

    #[tokio::test]
    async fn test_corrupt_cache_falls_through_to_fetch() {
        let (errors, seen) = counter();
        let opts = FetchOptions::<Todo>::new()
            .on_error(move |_| errors.set(errors.get() + 1))
            .cache(CacheOptions::new("todo").cache_result(true));
        let h = harness(opts, |n| Ok(todo(n)));
        h.session.set_item("todo", "{not json").unwrap();

        h.controller.execute().await;

        assert_eq!(h.calls.get(), 1);
        assert_eq!(seen.get(), 0);
        assert_eq!(h.controller.state().error, None);
        assert_eq!(h.controller.state().result, Some(todo(1)));
    }

    #[tokio::test]
    async fn test_loading_keeps_previous_result() {
        let h = harness(FetchOptions::<Todo>::new(), |n| {
            if n == 1 {
                Ok(todo(1))
            } else {
                Err(FetchError::Timeout)
            }
        });
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        h.controller
            .subscribe(move |state| sink.borrow_mut().push(state.clone()));

        h.controller.execute().await;
        h.controller.execute().await;

        let published = published.borrow();
        assert_eq!(published.len(), 4);
        assert!(published[0].loading && published[0].result.is_none());
        assert_eq!(published[1], FetchState::succeeded(todo(1)));
        assert!(published[2].loading);
        assert_eq!(published[2].result, Some(todo(1)));
        assert_eq!(published[3], FetchState::failed(FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_superseded_response_is_dropped() {
        let (successes, succeeded) = counter();
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let req = request(move || {
            counter.set(counter.get() + 1);
            let n = counter.get();
            async move {
                if n == 1 {
                    for _ in 0..3 {
                        tokio::task::yield_now().await;
                    }
                }
                Ok(todo(n))
            }
        });
        let session = MemoryStore::new();
        let opts = FetchOptions::<Todo>::new()
            .on_success(move |_| successes.set(successes.get() + 1))
            .cache(CacheOptions::new("todo").cache_result(false));
        let controller = FetchController::with_backends(
            req,
            opts,
            Stores::new(Rc::new(session.clone()), Rc::new(MemoryStore::new())),
            Rc::new(ManualClock::at(0)),
        );

        tokio::join!(controller.execute(), controller.execute());

        assert_eq!(calls.get(), 2);
        assert_eq!(succeeded.get(), 1);
        assert_eq!(controller.state(), FetchState::succeeded(todo(2)));
    }

    #[tokio::test]
    async fn test_invalidate_cache_twice() {
        let opts = FetchOptions::<Todo>::new().cache(CacheOptions::new("todo").cache_result(true));
        let h = harness(opts, |n| Ok(todo(n)));
        h.controller.execute().await;
        assert!(h.session.contains_key("todo"));

        h.controller.invalidate_cache();
        assert!(!h.session.contains_key("todo"));
        h.controller.invalidate_cache();
        assert!(!h.session.contains_key("todo"));

        // Without cache options there is nothing to remove.
        let h = harness(FetchOptions::<Todo>::new(), |n| Ok(todo(n)));
        h.session.set_item("todo", "x").unwrap();
        h.controller.invalidate_cache();
        assert!(h.session.contains_key("todo"));
    }
}
