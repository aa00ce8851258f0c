mod list;

pub use list::SaccoList;
