//! HS256 JWT + session table adapter.
//!
//! This adapter implements the `SessionValidator` port for tokens issued at
//! sign-in. A token is accepted when:
//!
//! 1. Its HS256 signature verifies against the shared secret
//! 2. It carries a positive integer `userId` claim
//! 3. A session row exists for the exact token, owned by the same user
//!
//! Sign-in tokens carry no `exp` claim; revocation happens by deleting the
//! session row. When an `exp` claim is present it is still enforced.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ticket_hotels::adapters::auth::JwtSessionValidator;
//! use ticket_hotels::adapters::postgres::PostgresSessionStore;
//!
//! let sessions = Arc::new(PostgresSessionStore::new(pool.clone()));
//! let validator = JwtSessionValidator::new(&config.auth.jwt_secret, sessions);
//! let user = validator.validate("eyJ...").await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{SessionStore, SessionValidator};

/// Claims written by the sign-in flow.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(rename = "userId")]
    user_id: i32,

    /// Issued at timestamp
    #[serde(default)]
    iat: Option<i64>,

    /// Optional expiry (Unix epoch seconds)
    #[serde(default)]
    exp: Option<i64>,
}

/// Validates signed session tokens against the session store.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    sessions: Arc<dyn SessionStore>,
}

impl JwtSessionValidator {
    pub fn new(secret: &SecretString, sessions: Arc<dyn SessionStore>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
            sessions,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;

        let user_id = UserId::new(claims.user_id).map_err(|_| {
            tracing::warn!("Invalid userId claim in token: {}", claims.user_id);
            AuthError::InvalidToken
        })?;

        let session_owner = self
            .sessions
            .find_user_by_token(token)
            .await
            .map_err(|e| {
                tracing::error!("Session lookup failed: {}", e);
                AuthError::service_unavailable(e.message)
            })?
            .ok_or_else(|| {
                tracing::debug!(user_id = %user_id, "No session for token");
                AuthError::InvalidToken
            })?;

        if session_owner != user_id {
            tracing::warn!(
                "Session owner mismatch: token claims user {}, session belongs to {}",
                user_id,
                session_owner
            );
            return Err(AuthError::InvalidToken);
        }

        Ok(AuthenticatedUser::new(user_id))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator").finish_non_exhaustive()
    }
}
