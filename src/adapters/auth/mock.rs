//! Mock authentication adapter for testing.
//!
//! Implements the `SessionValidator` port without signing keys or a session
//! table, so HTTP tests can authenticate with plain string tokens.
//!
//! # Example
//!
//! ```ignore
//! use ticket_hotels::adapters::auth::MockSessionValidator;
//! use ticket_hotels::domain::foundation::UserId;
//!
//! let validator = MockSessionValidator::new()
//!     .with_user("valid-token", UserId::new(1).unwrap());
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(mut self, token: impl Into<String>, user_id: UserId) -> Self {
        self.tokens
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(token.into(), AuthenticatedUser::new(user_id));
        self
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        self.tokens
            .read()
            .map_err(|_| AuthError::service_unavailable("mock token map poisoned"))?
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
