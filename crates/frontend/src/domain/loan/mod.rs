mod form;
mod list;

pub use list::LoanPage;
