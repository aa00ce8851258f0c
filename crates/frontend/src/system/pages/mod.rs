pub mod login;
pub mod password;
