//! Application shell: the auth gate and the authenticated layout.
//!
//! `AppShell` shows `LoginPage` until a session exists, then swaps in
//! `MainLayout` (header + sidebar + the active page).

use leptos::prelude::*;

use crate::domain::loan::LoanPage;
use crate::domain::membership::MembershipList;
use crate::domain::profile::ProfilePage;
use crate::domain::provider::ProviderList;
use crate::domain::sacco::SaccoList;
use crate::domain::saving::SavingPage;
use crate::domain::service::ServiceList;
use crate::domain::transaction::TransactionPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::password::ChangePasswordPage;

#[component]
#[allow(non_snake_case)]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell center=move || {
            match ctx.active.get() {
                Page::Saccos => view! { <SaccoList /> }.into_any(),
                Page::Memberships => view! { <MembershipList /> }.into_any(),
                Page::Services => view! { <ServiceList /> }.into_any(),
                Page::Savings => view! { <SavingPage /> }.into_any(),
                Page::Loans => view! { <LoanPage /> }.into_any(),
                Page::Providers => view! { <ProviderList /> }.into_any(),
                Page::Transactions => view! { <TransactionPage /> }.into_any(),
                Page::Profile => view! { <ProfilePage /> }.into_any(),
                Page::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
            }
        } />
    }
}

/// Auth gate. Logging out (or any 401 from the API) resets the session
/// signal, which drops straight back to the login page.
#[component]
#[allow(non_snake_case)]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
