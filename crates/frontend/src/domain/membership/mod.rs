mod list;

pub use list::MembershipList;
