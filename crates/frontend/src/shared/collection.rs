//! Generic list-fetching hook.
//!
//! Replaces the per-resource fetch closures each list page used to carry
//! with one parametric primitive: cancellable GET, tolerant shape
//! normalization, loading/error signals and a manual refetch.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use super::api::error::fetch_error_message;
use super::api::normalize::normalize_collection;
use super::api::{client, ApiError};

/// Handle to one fetched collection. Copy, so it can be captured freely in
/// view closures and event handlers.
pub struct UseCollection<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    path: StoredValue<String>,
    // The abort controller is a JS value; local storage keeps the handle
    // Copy + Send while the value itself stays on the UI thread.
    inflight: StoredValue<Option<AbortController>, LocalStorage>,
    generation: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for UseCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for UseCollection<T> {}

/// What a settled fetch may do to the hook's state.
#[derive(Debug, PartialEq)]
enum Settled<T> {
    /// Superseded while in flight; discarded, success and error alike.
    Stale,
    /// Aborted without being superseded; also leaves state untouched.
    Cancelled,
    Loaded(Vec<T>),
    Failed(String),
}

/// Classify a completed fetch against the hook's latest generation. A
/// completion whose generation no longer matches must not transition any
/// state, so a superseded request can never flicker its result or error
/// into view.
fn settle<T: DeserializeOwned>(
    completed: u64,
    latest: u64,
    result: Result<Value, ApiError>,
) -> Settled<T> {
    if completed != latest {
        return Settled::Stale;
    }
    match result {
        Ok(value) => Settled::Loaded(normalize_collection(value)),
        // fetch_error_message yields None only for a cancellation.
        Err(err) => match fetch_error_message(&err) {
            Some(message) => Settled::Failed(message),
            None => Settled::Cancelled,
        },
    }
}

impl<T> UseCollection<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Re-run the GET. A newer fetch aborts the previous controller and
    /// bumps the generation counter, which makes the older completion
    /// settle as stale.
    pub fn refetch(&self) {
        let this = *self;

        if let Some(previous) = this.inflight.try_update_value(|slot| slot.take()).flatten() {
            previous.abort();
        }
        let current = this
            .generation
            .try_update_value(|g| {
                *g = g.wrapping_add(1);
                *g
            })
            .unwrap_or(0);

        let controller = AbortController::new().ok();
        this.inflight.set_value(controller.clone());

        this.is_loading.set(true);
        this.error.set(None);

        let path = this.path.get_value();
        spawn_local(async move {
            let result = client::get_value(&path, controller).await;
            let latest = this.generation.try_with_value(|g| *g).unwrap_or(current);

            match settle(current, latest, result) {
                Settled::Stale => {}
                Settled::Cancelled => {
                    this.inflight.set_value(None);
                }
                Settled::Loaded(items) => {
                    this.inflight.set_value(None);
                    this.items.set(items);
                    this.is_loading.set(false);
                }
                Settled::Failed(message) => {
                    this.inflight.set_value(None);
                    log::warn!("fetch {} failed: {}", path, message);
                    this.error.set(Some(message));
                    this.is_loading.set(false);
                }
            }
        });
    }

    /// Optimistic accumulation for create flows: the new record goes to the
    /// front of the list, no refetch.
    pub fn prepend(&self, item: T) {
        self.items.update(|items| items.insert(0, item));
    }

    pub fn replace_all(&self, items: Vec<T>) {
        self.items.set(items);
    }
}

/// Fetch `path` once now and on every later `refetch()`.
///
/// Invariant: at most one request is in flight per hook instance.
pub fn use_collection<T>(path: impl Into<String>) -> UseCollection<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let collection = UseCollection {
        items: RwSignal::new(Vec::new()),
        is_loading: RwSignal::new(false),
        error: RwSignal::new(None),
        path: StoredValue::new(path.into()),
        inflight: StoredValue::new_local(None),
        generation: StoredValue::new(0),
    };

    collection.refetch();

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::error::NETWORK_ERROR_MESSAGE;
    use serde_json::json;

    #[test]
    fn stale_completion_is_discarded() {
        // A success that arrives after a newer fetch started must not
        // transition any state.
        let settled = settle::<i32>(3, 4, Ok(json!([1, 2, 3])));
        assert_eq!(settled, Settled::Stale);
    }

    #[test]
    fn stale_failure_is_equally_invisible() {
        let settled = settle::<i32>(3, 4, Err(ApiError::NoResponse));
        assert_eq!(settled, Settled::Stale);
    }

    #[test]
    fn current_completion_is_applied() {
        let settled = settle::<i32>(4, 4, Ok(json!([1, 2])));
        assert_eq!(settled, Settled::Loaded(vec![1, 2]));
    }

    #[test]
    fn current_failure_carries_a_message() {
        match settle::<i32>(4, 4, Err(ApiError::NoResponse)) {
            Settled::Failed(message) => assert_eq!(message, NETWORK_ERROR_MESSAGE),
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn cancellation_is_not_a_failure() {
        let settled = settle::<i32>(4, 4, Err(ApiError::Cancelled));
        assert_eq!(settled, Settled::Cancelled);
    }
}
