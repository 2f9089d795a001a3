//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::DatabaseConfig;

/// Returns the default NOTIFY channel name.
///
/// Matches the channel the `sql/schema.sql` trigger publishes on.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_channel() -> String {
    "issues_changed".to_string()
}

/// Returns the default connection pool size (5).
///
/// The dashboard runs one ordered SELECT at a time plus one listener
/// connection, so a small pool is plenty.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            channel: default_channel(),
            max_connections: default_max_connections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_defaults() {
        let config = DatabaseConfig::default();
        assert!(config.url.is_none());
        assert_eq!(config.channel, "issues_changed");
        assert_eq!(config.max_connections, 5);
    }
}
