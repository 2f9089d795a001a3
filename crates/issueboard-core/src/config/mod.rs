//! # Configuration System
//!
//! TOML configuration for the Issue Board dashboard.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.issueboard/config.toml`
//! 3. **Environment** - `ISSUEBOARD_DATABASE_URL` (database URL only)
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use issueboard_core::config::BoardConfig;
//!
//! fn example() -> Result<(), issueboard_core::ConfigError> {
//!     let config = BoardConfig::load_hierarchy()?;
//!     let url = config.database.resolved_url()?;
//!     let _ = url;
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

// Public API exports
pub use loading::DATABASE_URL_ENV;
pub use types::{BoardConfig, DatabaseConfig};

impl BoardConfig {
    /// Load configuration from the hierarchy of sources.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}
