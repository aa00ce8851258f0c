//! Generic write hook.
//!
//! One instance per logical operation: each carries its own saving flag and
//! error message, so two forms on the same page never share state. The
//! failure is recorded locally and then re-raised, letting the caller add a
//! notification without re-classifying the error.

use std::future::Future;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api::error::mutation_error_message;
use super::api::{client, ApiError};

#[derive(Clone, Copy)]
pub struct UseMutation {
    pub is_saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl UseMutation {
    pub fn new() -> Self {
        Self {
            is_saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// POST `body` to `path`; `fields` names the form fields whose per-field
    /// server errors should be surfaced verbatim.
    pub async fn post<T, B>(&self, path: &str, body: &B, fields: &[&str]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.run(client::post_json(path, body), fields).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B, fields: &[&str]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.run(client::put_json(path, body), fields).await
    }

    /// POST where the success body may be empty (join, savings movements).
    pub async fn post_value<B>(
        &self,
        path: &str,
        body: &B,
        fields: &[&str],
    ) -> Result<serde_json::Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.run(client::post_value(path, body), fields).await
    }

    async fn run<T, F>(&self, request: F, fields: &[&str]) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.is_saving.set(true);
        self.error.set(None);
        let result = request.await;
        if let Err(err) = &result {
            self.error.set(mutation_error_message(err, fields));
        }
        self.is_saving.set(false);
        result
    }
}

impl Default for UseMutation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    use leptos::prelude::Owner;
    use serde_json::json;

    // The mutation futures in these tests never hit the network, so a
    // single poll with a no-op waker resolves them.
    fn resolve<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("future did not resolve synchronously"),
        }
    }

    #[test]
    fn failure_records_message_and_leaves_other_state_alone() {
        let owner = Owner::new();
        owner.set();

        // Rows loaded by a fetch hook elsewhere on the page.
        let rows = RwSignal::new(vec!["row-1", "row-2"]);
        let mutation = UseMutation::new();

        let failing = std::future::ready(Err::<(), _>(ApiError::Status {
            status: 400,
            status_text: "Bad Request".to_string(),
            body: Some(json!({"amount": ["must be positive"]})),
        }));
        let result = resolve(mutation.run(failing, &["amount"]));

        assert!(result.is_err());
        assert_eq!(mutation.error.get().as_deref(), Some("must be positive"));
        assert!(!mutation.is_saving.get());
        assert_eq!(rows.get(), vec!["row-1", "row-2"]);
    }

    #[test]
    fn success_clears_a_previous_error() {
        let owner = Owner::new();
        owner.set();

        let mutation = UseMutation::new();
        mutation.error.set(Some("stale message".to_string()));

        let result = resolve(mutation.run(std::future::ready(Ok(7u32)), &[]));

        assert_eq!(result.ok(), Some(7));
        assert_eq!(mutation.error.get(), None);
        assert!(!mutation.is_saving.get());
    }
}
