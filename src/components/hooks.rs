//! Reactive bindings for the fetch controller.
//!
//! [`use_fetch`] mirrors a [`FetchController`]'s state into a signal and
//! re-executes it whenever the dependency closure yields a new value.

use std::rc::Rc;

use leptos::prelude::*;
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen_futures::spawn_local;

use crate::core::error::FetchError;
use crate::core::fetch::{FetchController, FetchOptions, FetchState, RequestFn, Subscription};

/// Handle returned by [`use_fetch`].
pub struct FetchHandle<T: 'static> {
    /// Latest published state.
    pub state: RwSignal<FetchState<T>>,
    controller: StoredValue<FetchController<T>, LocalStorage>,
}

impl<T: 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for FetchHandle<T> {}

impl<T> FetchHandle<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn result(&self) -> Option<T> {
        self.state.with(|s| s.result.clone())
    }

    pub fn error(&self) -> Option<FetchError> {
        self.state.with(|s| s.error.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Run a fetch cycle now, independent of the dependencies.
    pub fn execute(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.execute().await;
        });
    }

    /// Remove the cached entry for this fetch.
    pub fn invalidate_cache(&self) {
        self.controller.with_value(|c| c.invalidate_cache());
    }
}

/// Fetch with browser-backed caching, re-run when `deps` changes.
///
/// `deps` is tracked like any reactive closure: read signals inside it to
/// re-trigger the fetch when they change. Return `()` to fetch once on
/// mount only.
pub fn use_fetch<T, D>(
    request: RequestFn<T>,
    options: FetchOptions<T>,
    deps: impl Fn() -> D + 'static,
) -> FetchHandle<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    D: PartialEq + 'static,
{
    let state = RwSignal::new(FetchState::idle());

    let controller = FetchController::new(request, options);
    controller.subscribe(move |published| {
        // The owning component may be gone by the time a request resolves.
        let _ = state.try_set(published.clone());
    });

    let subscription = Rc::new(Subscription::new(controller.clone()));
    Effect::new(move |_| {
        let deps = deps();
        let subscription = Rc::clone(&subscription);
        spawn_local(async move {
            subscription.update(deps).await;
        });
    });

    FetchHandle {
        state,
        controller: StoredValue::new_local(controller),
    }
}
