mod list;

pub use list::ProviderList;
