use leptos::prelude::*;

use super::context::use_auth;
use crate::system::pages::login::LoginPage;

/// Route guard: renders the protected content only while a session exists,
/// otherwise falls back to the login entry point.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_auth();

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
