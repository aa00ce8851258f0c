//! Sidebar navigation over the app's pages.

use leptos::prelude::*;

use super::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {Page::NAV.iter().map(|&page| {
                    view! {
                        <li class="sidebar__item">
                            <button
                                class="sidebar__link"
                                class:sidebar__link--active=move || ctx.active.get() == page
                                on:click=move |_| ctx.open(page)
                            >
                                {icon(page.icon_name())}
                                <span class="sidebar__label">{page.label()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
