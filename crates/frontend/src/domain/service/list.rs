use contracts::domain::service::ServiceProduct;
use leptos::prelude::*;

use crate::shared::collection::use_collection;
use crate::shared::format::format_kes;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let services = use_collection::<ServiceProduct>("/services/services/");

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Services"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| services.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || services.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || services.is_loading.get()>
                <div class="loading">"Loading services..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Interest rate"</th>
                            <th class="table__header-cell">"Minimum amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || services.items.get().into_iter().map(|s| {
                            let description = s.description.unwrap_or_else(|| "-".to_string());
                            let rate = s
                                .interest_rate
                                .map(|r| format!("{:.1}%", r))
                                .unwrap_or_else(|| "-".to_string());
                            let min_amount = s
                                .min_amount
                                .map(format_kes)
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{s.name}</td>
                                    <td class="table__cell">{description}</td>
                                    <td class="table__cell">{rate}</td>
                                    <td class="table__cell">{min_amount}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
