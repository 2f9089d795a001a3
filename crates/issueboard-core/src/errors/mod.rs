use std::error::Error;

/// Base trait for all application errors
pub trait BoardError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error(
        "No database URL configured. Set ISSUEBOARD_DATABASE_URL or add [database] url to the config file"
    )]
    MissingDatabaseUrl,

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl BoardError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::MissingDatabaseUrl => "MISSING_DATABASE_URL",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::MissingDatabaseUrl
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}

/// Errors from the remote issue store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open connection pool to the issue database: {source}")]
    Connect { source: sqlx::Error },

    #[error("Issue query failed: {source}")]
    Query { source: sqlx::Error },

    #[error("Row '{id}' has unknown issue category '{value}'")]
    UnknownCategory { id: String, value: String },

    #[error("Row '{id}' has unknown issue status '{value}'")]
    UnknownStatus { id: String, value: String },
}

impl BoardError for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            StoreError::Connect { .. } => "STORE_CONNECT_FAILED",
            StoreError::Query { .. } => "STORE_QUERY_FAILED",
            StoreError::UnknownCategory { .. } => "STORE_UNKNOWN_CATEGORY",
            StoreError::UnknownStatus { .. } => "STORE_UNKNOWN_STATUS",
        }
    }
}

/// Errors from the realtime change feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Failed to connect change listener: {source}")]
    Connect { source: sqlx::Error },

    #[error("Failed to listen on channel '{channel}': {source}")]
    Listen { channel: String, source: sqlx::Error },
}

impl BoardError for FeedError {
    fn error_code(&self) -> &'static str {
        match self {
            FeedError::Connect { .. } => "FEED_CONNECT_FAILED",
            FeedError::Listen { .. } => "FEED_LISTEN_FAILED",
        }
    }
}
