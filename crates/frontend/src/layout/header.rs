use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::api;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button class="top-header__toggle" on:click=move |_| ctx.toggle_sidebar()>
                    "☰"
                </button>
                <span class="top-header__title">"SaccoHub"</span>
            </div>
            <div class="top-header__actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| ctx.open(Page::ChangePassword)
                >
                    {icon("lock")}
                    "Change password"
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        // Synchronous: clears tokens and flips the session
                        // signal; the auth gate swaps to the login page.
                        api::logout();
                    }
                >
                    {icon("logout")}
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
