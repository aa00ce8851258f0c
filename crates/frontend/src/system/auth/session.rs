//! Single owner of the session.
//!
//! The reactive signal lives in the component tree (provided by
//! `AuthProvider`), but the HTTP client runs outside any component and must
//! observe the same truth. The provider registers its signal here, and every
//! token write goes through `establish`/`invalidate` so localStorage and the
//! signal can never disagree.

use std::cell::RefCell;

use leptos::prelude::*;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "sacco_access_token";
const REFRESH_TOKEN_KEY: &str = "sacco_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read_slot(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn write_slot(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Access token persisted from the last login, if any. Read by the HTTP
/// client on every request.
pub fn stored_access_token() -> Option<String> {
    read_slot(ACCESS_TOKEN_KEY)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn from_storage() -> Self {
        Self {
            access_token: read_slot(ACCESS_TOKEN_KEY),
            refresh_token: read_slot(REFRESH_TOKEN_KEY),
        }
    }
}

thread_local! {
    static SESSION: RefCell<Option<RwSignal<SessionState>>> = const { RefCell::new(None) };
}

/// Register the app's session signal. Called once by `AuthProvider`.
pub fn install(signal: RwSignal<SessionState>) {
    SESSION.with(|slot| *slot.borrow_mut() = Some(signal));
}

fn with_signal(f: impl FnOnce(RwSignal<SessionState>)) {
    let signal = SESSION.with(|slot| *slot.borrow());
    if let Some(signal) = signal {
        f(signal);
    }
}

/// Persist fresh tokens and flip the app to authenticated.
pub fn establish(access_token: String, refresh_token: Option<String>) {
    write_slot(ACCESS_TOKEN_KEY, &access_token);
    if let Some(refresh) = &refresh_token {
        write_slot(REFRESH_TOKEN_KEY, refresh);
    }
    with_signal(|signal| {
        signal.set(SessionState {
            access_token: Some(access_token),
            refresh_token,
        })
    });
}

/// Drop the session everywhere: both persisted slots and the signal.
/// Called by logout and by the HTTP client whenever any call returns 401.
pub fn invalidate() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
    with_signal(|signal| signal.set(SessionState::default()));
}
