//! In-memory implementation of `SessionStore`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::SessionStore;

/// Open sessions keyed by token.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, UserId>>,
    failure: Option<String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every lookup fails with a database error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sessions: RwLock::default(),
            failure: Some(message.into()),
        }
    }

    pub fn with_session(mut self, token: impl Into<String>, user_id: UserId) -> Self {
        self.sessions.get_mut().insert(token.into(), user_id);
        self
    }

    /// Ends a session, revoking its token.
    pub async fn remove_session(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        if let Some(message) = &self.failure {
            return Err(DomainError::new(ErrorCode::DatabaseError, message.clone()));
        }
        Ok(self.sessions.read().await.get(token).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_owner_of_open_session() {
        let store = InMemorySessionStore::new().with_session("tok", UserId::from_raw(3));
        let user = store.find_user_by_token("tok").await.unwrap();
        assert_eq!(user, Some(UserId::from_raw(3)));
    }

    #[tokio::test]
    async fn removed_session_is_gone() {
        let store = InMemorySessionStore::new().with_session("tok", UserId::from_raw(3));
        store.remove_session("tok").await;
        assert_eq!(store.find_user_by_token("tok").await.unwrap(), None);
    }
}
