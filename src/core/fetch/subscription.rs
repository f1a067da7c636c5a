//! Re-run a fetch when its dependencies change.

use std::cell::RefCell;

use serde::{Serialize, de::DeserializeOwned};

use super::controller::FetchController;

/// Binds a [`FetchController`] to a dependency value.
///
/// The first [`update`](Self::update) always executes; later calls execute
/// only when the value differs from the previous one. Tuples and vectors
/// compare element by element, so a change in any position re-triggers.
pub struct Subscription<T, D> {
    controller: FetchController<T>,
    last: RefCell<Option<D>>,
}

impl<T, D: PartialEq> Subscription<T, D> {
    pub fn new(controller: FetchController<T>) -> Self {
        Self {
            controller,
            last: RefCell::new(None),
        }
    }

    pub fn controller(&self) -> &FetchController<T> {
        &self.controller
    }

    /// Record `deps`, returning whether they differ from the last value.
    fn changed(&self, deps: D) -> bool {
        let mut last = self.last.borrow_mut();
        if last.as_ref() == Some(&deps) {
            return false;
        }
        *last = Some(deps);
        true
    }
}

impl<T, D> Subscription<T, D>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
    D: PartialEq,
{
    /// Execute if `deps` changed. Returns whether a cycle ran.
    pub async fn update(&self, deps: D) -> bool {
        if !self.changed(deps) {
            return false;
        }
        self.controller.execute().await;
        true
    }
}
