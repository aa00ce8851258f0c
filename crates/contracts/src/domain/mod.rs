pub mod loan;
pub mod membership;
pub mod profile;
pub mod provider;
pub mod sacco;
pub mod saving;
pub mod service;
pub mod transaction;
