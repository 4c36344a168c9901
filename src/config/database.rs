//! Connection settings for the shared ticketing database.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on `max_connections`; the Prisma services share the server.
pub const MAX_POOL_SIZE: u32 = 100;

/// Where the ticketing database lives and how the pool talks to it.
///
/// Every request makes up to four short reads, so only the pool ceiling
/// and the acquire wait are tunable.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long a request waits for a free connection before it fails
    /// with an infrastructure error.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Apply `migrations/` on startup. Off by default because the Prisma
    /// services normally own the schema.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.url.split_once("://") {
            _ if self.url.trim().is_empty() => {
                return Err(ValidationError::MissingRequired("database.url"))
            }
            Some(("postgres" | "postgresql", rest)) if !rest.is_empty() => {}
            _ => return Err(ValidationError::InvalidDatabaseUrl),
        }

        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            return Err(ValidationError::InvalidPoolSize {
                got: self.max_connections,
                max: MAX_POOL_SIZE,
            });
        }

        if self.acquire_timeout_secs == 0 {
            return Err(ValidationError::InvalidAcquireTimeout);
        }

        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}
