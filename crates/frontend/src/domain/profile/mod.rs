mod form;

pub use form::ProfilePage;
