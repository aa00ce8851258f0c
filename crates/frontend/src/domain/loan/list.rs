use contracts::domain::loan::Loan;
use leptos::prelude::*;

use super::form::LoanApplicationForm;
use crate::shared::collection::use_collection;
use crate::shared::format::{format_datetime, format_kes};
use crate::shared::icons::icon;

#[derive(Clone, Debug)]
struct LoanRow {
    amount: String,
    purpose: String,
    status: String,
    period: String,
    applied_at: String,
}

impl From<Loan> for LoanRow {
    fn from(l: Loan) -> Self {
        Self {
            amount: format_kes(l.amount),
            purpose: l.purpose.unwrap_or_else(|| "-".to_string()),
            status: l.status.unwrap_or_else(|| "pending".to_string()),
            period: l
                .repayment_period
                .map(|months| format!("{} months", months))
                .unwrap_or_else(|| "-".to_string()),
            applied_at: format_datetime(l.applied_at),
        }
    }
}

/// Loans page: history table plus the application form. A successful
/// application is prepended locally; no refetch of the whole list.
#[component]
#[allow(non_snake_case)]
pub fn LoanPage() -> impl IntoView {
    let loans = use_collection::<Loan>("/services/loans/");
    let (show_form, set_show_form) = signal(false);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Loans"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_form.set(true)>
                        {icon("plus")}
                        "Apply for a loan"
                    </button>
                    <button class="button button--secondary" on:click=move |_| loans.refetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || loans.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || show_form.get()>
                <LoanApplicationForm
                    loans=loans
                    on_done=move || set_show_form.set(false)
                />
            </Show>

            <Show when=move || loans.is_loading.get()>
                <div class="loading">"Loading loans..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Amount"</th>
                            <th class="table__header-cell">"Purpose"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Repayment"</th>
                            <th class="table__header-cell">"Applied"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || loans.items.get().into_iter().map(LoanRow::from).map(|row| view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.amount}</td>
                                <td class="table__cell">{row.purpose}</td>
                                <td class="table__cell">{row.status}</td>
                                <td class="table__cell">{row.period}</td>
                                <td class="table__cell">{row.applied_at}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
