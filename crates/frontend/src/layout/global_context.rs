use leptos::prelude::*;

/// Every navigable page of the app. The sidebar lists `NAV` in order; the
/// change-password page is reached from the header instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Saccos,
    Memberships,
    Services,
    Savings,
    Loans,
    Providers,
    Transactions,
    Profile,
    ChangePassword,
}

impl Page {
    pub const NAV: [Page; 8] = [
        Page::Saccos,
        Page::Memberships,
        Page::Services,
        Page::Savings,
        Page::Loans,
        Page::Providers,
        Page::Transactions,
        Page::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Saccos => "Saccos",
            Page::Memberships => "My memberships",
            Page::Services => "Services",
            Page::Savings => "Savings",
            Page::Loans => "Loans",
            Page::Providers => "Payment providers",
            Page::Transactions => "Transactions",
            Page::Profile => "Profile",
            Page::ChangePassword => "Change password",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Saccos => "saccos",
            Page::Memberships => "members",
            Page::Services => "services",
            Page::Savings => "savings",
            Page::Loans => "loans",
            Page::Providers => "providers",
            Page::Transactions => "transactions",
            Page::Profile => "profile",
            Page::ChangePassword => "lock",
        }
    }
}

/// App-wide navigation state, provided once at the root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Saccos),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, page: Page) {
        self.active.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
