use contracts::domain::loan::{Loan, LoanApplication};
use contracts::domain::service::ServiceProduct;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::collection::{use_collection, UseCollection};
use crate::shared::mutation::UseMutation;

const LOAN_FIELDS: &[&str] = &["amount", "purpose", "repayment_period", "service"];

#[component]
#[allow(non_snake_case)]
pub fn LoanApplicationForm(
    loans: UseCollection<Loan>,
    on_done: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let services = use_collection::<ServiceProduct>("/services/services/");
    let apply = UseMutation::new();

    let (service, set_service) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (purpose, set_purpose) = signal(String::new());
    let (period, set_period) = signal(String::new());
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);

        let Ok(amount_val) = amount.get().trim().parse::<f64>() else {
            set_local_error.set(Some("Enter a valid amount".to_string()));
            return;
        };
        if amount_val <= 0.0 {
            set_local_error.set(Some("Amount must be greater than zero".to_string()));
            return;
        }

        let request = LoanApplication {
            service: service.get().parse::<i64>().ok(),
            amount: amount_val,
            purpose: purpose.get(),
            repayment_period: period.get().parse::<u32>().ok(),
        };

        spawn_local(async move {
            if let Ok(created) = apply.post::<Loan, _>("/services/loans/", &request, LOAN_FIELDS).await {
                loans.prepend(created);
                on_done();
            }
        });
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">"Loan application"</h2>

            {move || local_error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            {move || apply.error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <form class="form" on:submit=on_submit>
                <div class="form-group">
                    <label for="loan_service">"Service"</label>
                    <select
                        id="loan_service"
                        on:change=move |ev| set_service.set(event_target_value(&ev))
                        disabled=move || apply.is_saving.get()
                    >
                        <option value="">"Select a service"</option>
                        {move || services.items.get().into_iter().map(|s| view! {
                            <option value=s.id.to_string()>{s.name}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="loan_amount">"Amount (KES)"</label>
                    <input
                        type="number"
                        id="loan_amount"
                        min="1"
                        step="0.01"
                        value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                        required
                        disabled=move || apply.is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="loan_purpose">"Purpose"</label>
                    <input
                        type="text"
                        id="loan_purpose"
                        value=move || purpose.get()
                        on:input=move |ev| set_purpose.set(event_target_value(&ev))
                        required
                        disabled=move || apply.is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="loan_period">"Repayment period (months)"</label>
                    <input
                        type="number"
                        id="loan_period"
                        min="1"
                        value=move || period.get()
                        on:input=move |ev| set_period.set(event_target_value(&ev))
                        disabled=move || apply.is_saving.get()
                    />
                </div>

                <div class="form__actions">
                    <button type="submit" class="button button--primary" disabled=move || apply.is_saving.get()>
                        {move || if apply.is_saving.get() { "Submitting..." } else { "Submit application" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_done()
                        disabled=move || apply.is_saving.get()
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
