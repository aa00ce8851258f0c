use contracts::domain::saving::SavingRequest;
use contracts::domain::service::ServiceProduct;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::collection::use_collection;
use crate::shared::mutation::UseMutation;

const SAVING_FIELDS: &[&str] = &["amount", "transaction_type", "service"];

/// Savings page: pick a savings product and record a deposit or withdrawal.
#[component]
#[allow(non_snake_case)]
pub fn SavingPage() -> impl IntoView {
    let services = use_collection::<ServiceProduct>("/services/services/");
    let save = UseMutation::new();

    let (service, set_service) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (kind, set_kind) = signal("deposit".to_string());
    let (local_error, set_local_error) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);
        set_notice.set(None);

        let Ok(amount_val) = amount.get().trim().parse::<f64>() else {
            set_local_error.set(Some("Enter a valid amount".to_string()));
            return;
        };
        if amount_val <= 0.0 {
            set_local_error.set(Some("Amount must be greater than zero".to_string()));
            return;
        }
        let Ok(service_id) = service.get().parse::<i64>() else {
            set_local_error.set(Some("Select a savings product".to_string()));
            return;
        };

        let request = SavingRequest {
            service: service_id,
            amount: amount_val,
            transaction_type: kind.get(),
        };

        spawn_local(async move {
            // The success body shape varies by product, so it is not decoded.
            if save
                .post_value("/services/savings/", &request, SAVING_FIELDS)
                .await
                .is_ok()
            {
                set_notice.set(Some("Savings transaction recorded.".to_string()));
                set_amount.set(String::new());
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Savings"</h1>
                </div>
            </div>

            {move || notice.get().map(|n| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"✓"</span>
                    <span class="warning-box__text">{n}</span>
                </div>
            })}
            {move || local_error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            {move || save.error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <div class="panel">
                <form class="form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="saving_service">"Savings product"</label>
                        <select
                            id="saving_service"
                            on:change=move |ev| set_service.set(event_target_value(&ev))
                            disabled=move || save.is_saving.get()
                        >
                            <option value="">"Select a product"</option>
                            {move || services.items.get().into_iter().map(|s| view! {
                                <option value=s.id.to_string()>{s.name}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="saving_type">"Type"</label>
                        <select
                            id="saving_type"
                            on:change=move |ev| set_kind.set(event_target_value(&ev))
                            disabled=move || save.is_saving.get()
                        >
                            <option value="deposit" selected>"Deposit"</option>
                            <option value="withdrawal">"Withdrawal"</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="saving_amount">"Amount (KES)"</label>
                        <input
                            type="number"
                            id="saving_amount"
                            min="1"
                            step="0.01"
                            value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            required
                            disabled=move || save.is_saving.get()
                        />
                    </div>

                    <div class="form__actions">
                        <button type="submit" class="button button--primary" disabled=move || save.is_saving.get()>
                            {move || if save.is_saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
