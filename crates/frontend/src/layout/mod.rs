pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use global_context::AppGlobalContext;
use header::Header;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <Header />

            <div class="app-body">
                <div class="app-sidebar" class:app-sidebar--collapsed=move || !ctx.sidebar_open.get()>
                    <Sidebar />
                </div>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
