use leptos::prelude::*;

use super::session::{self, SessionState};

/// Auth context provider component.
///
/// Restores the session from localStorage on mount (tokens survive reloads)
/// and registers the signal as the single session owner, so the HTTP client
/// and the auth gate see the same state.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let session_state = RwSignal::new(SessionState::from_storage());
    session::install(session_state);
    provide_context(session_state);

    children()
}

/// Hook to access the session state
pub fn use_auth() -> RwSignal<SessionState> {
    use_context::<RwSignal<SessionState>>().expect("AuthProvider not found in component tree")
}
