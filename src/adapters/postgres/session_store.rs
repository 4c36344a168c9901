//! PostgreSQL implementation of SessionStore.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SessionStore;

/// Reads the `"Session"` table written by sign-in.
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn find_user_by_token(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        let row: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT "userId"
            FROM "Session"
            WHERE token = $1
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find session", e))?;

        Ok(row.map(|(user_id,)| UserId::from_raw(user_id)))
    }
}
