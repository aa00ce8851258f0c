use contracts::domain::membership::Membership;
use leptos::prelude::*;

use crate::shared::collection::use_collection;
use crate::shared::format::format_date;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn MembershipList() -> impl IntoView {
    let memberships = use_collection::<Membership>("/members/memberships/");

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"My memberships"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| memberships.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || memberships.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || memberships.is_loading.get()>
                <div class="loading">"Loading memberships..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Sacco"</th>
                            <th class="table__header-cell">"Role"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || memberships.items.get().into_iter().map(|m| {
                            let sacco = m.sacco_name.unwrap_or_else(|| format!("Sacco #{}", m.sacco));
                            let role = m.role.unwrap_or_else(|| "member".to_string());
                            let status = if m.is_active { "Active" } else { "Inactive" };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{sacco}</td>
                                    <td class="table__cell">{role}</td>
                                    <td class="table__cell">
                                        <span
                                            class="badge"
                                            class:badge--success=m.is_active
                                            class:badge--muted=!m.is_active
                                        >
                                            {status}
                                        </span>
                                    </td>
                                    <td class="table__cell">{format_date(m.date_joined)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
