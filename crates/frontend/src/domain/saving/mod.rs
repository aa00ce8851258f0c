mod form;

pub use form::SavingPage;
