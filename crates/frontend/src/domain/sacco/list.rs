use std::collections::HashSet;

use contracts::domain::sacco::Sacco;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::collection::use_collection;
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::mutation::UseMutation;

#[derive(Clone, Debug)]
struct SaccoRow {
    id: i64,
    name: String,
    description: String,
    location: String,
    members: String,
    created_at: String,
}

impl From<Sacco> for SaccoRow {
    fn from(s: Sacco) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description.unwrap_or_else(|| "-".to_string()),
            location: s.location.unwrap_or_else(|| "-".to_string()),
            members: s
                .member_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            created_at: format_date(s.created_at),
        }
    }
}

/// Browse all saccos and join one. Joining marks the row locally; the
/// membership list is its own page and refetches on visit.
#[component]
#[allow(non_snake_case)]
pub fn SaccoList() -> impl IntoView {
    let saccos = use_collection::<Sacco>("/accounts/saccos/");
    let join = UseMutation::new();
    let (joined, set_joined) = signal::<HashSet<i64>>(HashSet::new());

    let handle_join = move |sacco_id: i64| {
        spawn_local(async move {
            let path = format!("/members/join_sacco/{}/", sacco_id);
            if join.post_value(&path, &serde_json::json!({}), &[]).await.is_ok() {
                set_joined.update(|ids| {
                    ids.insert(sacco_id);
                });
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Saccos"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| saccos.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || saccos.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || join.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || saccos.is_loading.get()>
                <div class="loading">"Loading saccos..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Location"</th>
                            <th class="table__header-cell">"Members"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || saccos.items.get().into_iter().map(SaccoRow::from).map(|row| {
                            let id = row.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell">{row.location}</td>
                                    <td class="table__cell">{row.members}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell">
                                        <Show
                                            when=move || !joined.get().contains(&id)
                                            fallback=|| view! { <span class="badge badge--success">"Joined"</span> }
                                        >
                                            <button
                                                class="button button--primary"
                                                disabled=move || join.is_saving.get()
                                                on:click=move |_| handle_join(id)
                                            >
                                                "Join"
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
