use contracts::domain::provider::PaymentProvider;
use leptos::prelude::*;

use crate::shared::collection::use_collection;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn ProviderList() -> impl IntoView {
    let providers = use_collection::<PaymentProvider>("/payments/providers/");

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Payment providers"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| providers.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || providers.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || providers.is_loading.get()>
                <div class="loading">"Loading providers..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Code"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || providers.items.get().into_iter().map(|p| {
                            let code = p.code.unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{p.name}</td>
                                    <td class="table__cell">{code}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
