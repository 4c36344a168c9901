//! Session store port.
//!
//! Sign-in writes a session row holding the issued token. A token whose
//! signature checks out is still rejected unless such a row exists, so
//! signing out (deleting the row) revokes the token.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Looks up open sessions by token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the owner of the session holding `token`, if any.
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError>;
}
