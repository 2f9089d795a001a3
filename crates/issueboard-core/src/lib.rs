//! issueboard-core: Core library for the Issue Board dashboard
//!
//! This library provides everything the UI needs to mirror the shared
//! issue table: typed issue records, read-only access to the hosted
//! Postgres table, and the LISTEN/NOTIFY change feed that drives live
//! updates. The table itself is owned and written by external
//! collaborators; this crate only observes it.
//!
//! # Main Entry Points
//!
//! - [`issues`] - Issue record types and the remote store
//! - [`feed`] - Realtime change-notification subscription
//! - [`config`] - Configuration management
//! - [`errors`] - Error types shared across the workspace

pub mod config;
pub mod errors;
pub mod events;
pub mod feed;
pub mod issues;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use config::{BoardConfig, DatabaseConfig};
pub use errors::{BoardError, ConfigError, FeedError, StoreError};
pub use feed::{ChangeEvent, ChangeFeed};
pub use issues::store::IssueStore;
pub use issues::types::{Issue, IssueCategory, IssueStatus};

// Re-export logging initialization
pub use logging::init_logging;
