pub mod api;
pub mod collection;
pub mod format;
pub mod icons;
pub mod mutation;
