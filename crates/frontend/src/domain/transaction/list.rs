use contracts::domain::transaction::TransactionRecord;
use leptos::prelude::*;

use super::form::NewTransactionForm;
use crate::shared::collection::use_collection;
use crate::shared::format::{format_datetime, format_kes};
use crate::shared::icons::icon;

#[derive(Clone, Debug)]
struct TransactionRow {
    amount: String,
    kind: String,
    provider: String,
    status: String,
    reference: String,
    created_at: String,
}

impl From<TransactionRecord> for TransactionRow {
    fn from(t: TransactionRecord) -> Self {
        Self {
            amount: format_kes(t.amount),
            kind: t.transaction_type.unwrap_or_else(|| "-".to_string()),
            provider: t.provider_name.unwrap_or_else(|| "-".to_string()),
            status: t.status.unwrap_or_else(|| "pending".to_string()),
            reference: t.reference.unwrap_or_else(|| "-".to_string()),
            created_at: format_datetime(t.created_at),
        }
    }
}

/// Transaction history plus the payment form. A created transaction is
/// prepended locally instead of refetching the whole history.
#[component]
#[allow(non_snake_case)]
pub fn TransactionPage() -> impl IntoView {
    let transactions = use_collection::<TransactionRecord>("/payments/transactions/");
    let (show_form, set_show_form) = signal(false);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Transactions"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_form.set(true)>
                        {icon("plus")}
                        "New transaction"
                    </button>
                    <button class="button button--secondary" on:click=move |_| transactions.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || transactions.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || show_form.get()>
                <NewTransactionForm
                    transactions=transactions
                    on_done=move || set_show_form.set(false)
                />
            </Show>

            <Show when=move || transactions.is_loading.get()>
                <div class="loading">"Loading transactions..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Provider"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Reference"</th>
                            <th class="table__header-cell">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || transactions.items.get().into_iter().map(TransactionRow::from).map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.amount}</td>
                                <td class="table__cell">{row.kind}</td>
                                <td class="table__cell">{row.provider}</td>
                                <td class="table__cell">{row.status}</td>
                                <td class="table__cell">{row.reference}</td>
                                <td class="table__cell">{row.created_at}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
