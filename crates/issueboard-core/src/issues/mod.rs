//! Issue records and read-only access to the shared issue table.

pub mod store;
pub mod types;

pub use store::IssueStore;
pub use types::{Issue, IssueCategory, IssueStatus};
