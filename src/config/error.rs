//! Configuration error types

use thiserror::Error;

/// Startup failures before the server binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// A setting was present but unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("database.url must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("database.max_connections must be between 1 and {max}, got {got}")]
    InvalidPoolSize { got: u32, max: u32 },

    #[error("database.acquire_timeout_secs must be greater than zero")]
    InvalidAcquireTimeout,

    #[error("server.request_timeout_secs must be between 1 and 300, got {0}")]
    InvalidRequestTimeout(u64),

    #[error("auth.jwt_secret must be at least {0} bytes in production")]
    JwtSecretTooShort(usize),
}
