//! Shared HTTP dispatch.
//!
//! Every call attaches the persisted bearer token when one exists, runs
//! under the client-wide timeout, and funnels 401 responses through
//! `session::invalidate` before the error reaches the caller.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::AbortController;

use super::error::ApiError;
use crate::system::auth::session;

const DEFAULT_BASE_URL: &str = "https://api.saccohub.co.ke";

/// Client-wide request timeout. There is no retry policy; a timed-out call
/// surfaces once as a no-response failure.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

pub fn base_url() -> &'static str {
    option_env!("SACCO_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

fn url_for(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

/// Attach `Authorization: Bearer <token>` when a token is persisted.
/// Fails open: an absent token simply leaves the header off.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::stored_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn new_controller() -> Option<AbortController> {
    AbortController::new().ok()
}

/// Send a built request, arming the timeout and classifying the outcome.
///
/// The timeout shares the request's abort controller; a flag distinguishes
/// a timeout abort (no-response) from a caller-initiated one (cancelled).
async fn dispatch<F>(send: F, controller: Option<AbortController>) -> Result<Response, ApiError>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    let timed_out = Rc::new(Cell::new(false));
    let timer = controller.clone().map(|controller| {
        let flag = Rc::clone(&timed_out);
        Timeout::new(REQUEST_TIMEOUT_MS, move || {
            flag.set(true);
            controller.abort();
        })
    });

    let result = send.await;
    // Dropping the handle disarms the timer once the request has settled.
    drop(timer);

    let response = match result {
        Ok(response) => response,
        Err(gloo_net::Error::JsError(js)) if js.name == "AbortError" => {
            return Err(if timed_out.get() {
                ApiError::NoResponse
            } else {
                ApiError::Cancelled
            });
        }
        Err(gloo_net::Error::JsError(_)) => return Err(ApiError::NoResponse),
        Err(err) => return Err(ApiError::Client(err.to_string())),
    };

    if response.status() == 401 {
        // Stale credentials invalidate the whole session, no matter which
        // call observed the 401. The error is still returned to the caller.
        session::invalidate();
    }

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.json::<Value>().await.ok();
        return Err(ApiError::Status {
            status,
            status_text,
            body,
        });
    }

    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Client(err.to_string()))
}

/// GET returning the raw JSON value, for callers that normalize the shape
/// themselves. `cancel` lets fetch hooks abort a superseded request.
pub async fn get_value(path: &str, cancel: Option<AbortController>) -> Result<Value, ApiError> {
    let controller = cancel.or_else(new_controller);
    let signal = controller.as_ref().map(|c| c.signal());
    let builder = authorize(Request::get(&url_for(path)).abort_signal(signal.as_ref()));
    let response = dispatch(builder.send(), controller).await?;
    decode(response).await
}

pub async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let controller = new_controller();
    let signal = controller.as_ref().map(|c| c.signal());
    let request = authorize(Request::post(&url_for(path)).abort_signal(signal.as_ref()))
        .json(body)
        .map_err(|err| ApiError::Client(err.to_string()))?;
    let response = dispatch(request.send(), controller).await?;
    decode(response).await
}

pub async fn put_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let controller = new_controller();
    let signal = controller.as_ref().map(|c| c.signal());
    let request = authorize(Request::put(&url_for(path)).abort_signal(signal.as_ref()))
        .json(body)
        .map_err(|err| ApiError::Client(err.to_string()))?;
    let response = dispatch(request.send(), controller).await?;
    decode(response).await
}

/// POST that tolerates an empty or non-JSON success body (the auth and join
/// endpoints answer 200 with no payload on some deployments).
pub async fn post_value<B>(path: &str, body: &B) -> Result<Value, ApiError>
where
    B: Serialize + ?Sized,
{
    let controller = new_controller();
    let signal = controller.as_ref().map(|c| c.signal());
    let request = authorize(Request::post(&url_for(path)).abort_signal(signal.as_ref()))
        .json(body)
        .map_err(|err| ApiError::Client(err.to_string()))?;
    let response = dispatch(request.send(), controller).await?;
    let text = response
        .text()
        .await
        .map_err(|err| ApiError::Client(err.to_string()))?;
    Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
}
