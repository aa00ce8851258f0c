use contracts::domain::provider::PaymentProvider;
use contracts::domain::transaction::{NewTransaction, TransactionRecord};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::collection::{use_collection, UseCollection};
use crate::shared::mutation::UseMutation;

const TRANSACTION_FIELDS: &[&str] = &["amount", "transaction_type", "provider", "phone_number"];

#[component]
#[allow(non_snake_case)]
pub fn NewTransactionForm(
    transactions: UseCollection<TransactionRecord>,
    on_done: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let providers = use_collection::<PaymentProvider>("/payments/providers/");
    let create = UseMutation::new();

    let (provider, set_provider) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (kind, set_kind) = signal("deposit".to_string());
    let (phone, set_phone) = signal(String::new());
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);

        let Ok(amount_val) = amount.get().trim().parse::<f64>() else {
            set_local_error.set(Some("Enter a valid amount".to_string()));
            return;
        };
        let Ok(provider_id) = provider.get().parse::<i64>() else {
            set_local_error.set(Some("Select a payment provider".to_string()));
            return;
        };

        let phone_val = phone.get();
        let request = NewTransaction {
            amount: amount_val,
            transaction_type: kind.get(),
            provider: provider_id,
            phone_number: if phone_val.is_empty() { None } else { Some(phone_val) },
        };

        spawn_local(async move {
            if let Ok(created) = create
                .post::<TransactionRecord, _>("/payments/transactions/", &request, TRANSACTION_FIELDS)
                .await
            {
                transactions.prepend(created);
                on_done();
            }
        });
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">"New transaction"</h2>

            {move || local_error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            {move || create.error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <form class="form" on:submit=on_submit>
                <div class="form-group">
                    <label for="tx_type">"Type"</label>
                    <select
                        id="tx_type"
                        on:change=move |ev| set_kind.set(event_target_value(&ev))
                        disabled=move || create.is_saving.get()
                    >
                        <option value="deposit" selected>"Deposit"</option>
                        <option value="withdrawal">"Withdrawal"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="tx_provider">"Provider"</label>
                    <select
                        id="tx_provider"
                        on:change=move |ev| set_provider.set(event_target_value(&ev))
                        disabled=move || create.is_saving.get()
                    >
                        <option value="">"Select a provider"</option>
                        {move || providers.items.get().into_iter().map(|p| view! {
                            <option value=p.id.to_string()>{p.name}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="tx_amount">"Amount (KES)"</label>
                    <input
                        type="number"
                        id="tx_amount"
                        min="1"
                        step="0.01"
                        value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        required
                        disabled=move || create.is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="tx_phone">"Phone number (for mobile money)"</label>
                    <input
                        type="tel"
                        id="tx_phone"
                        placeholder="+2547..."
                        value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                        disabled=move || create.is_saving.get()
                    />
                </div>

                <div class="form__actions">
                    <button type="submit" class="button button--primary" disabled=move || create.is_saving.get()>
                        {move || if create.is_saving.get() { "Submitting..." } else { "Submit" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_done()
                        disabled=move || create.is_saving.get()
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
