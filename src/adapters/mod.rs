//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session token validation (HS256 + session table, mock)
//! - `http` - axum routes, middleware and DTOs
//! - `memory` - In-memory stores for tests
//! - `postgres` - sqlx-backed readers

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use auth::{JwtSessionValidator, MockSessionValidator};
pub use memory::{InMemoryHotelStore, InMemorySessionStore, InMemoryTicketingStore};
pub use postgres::{PostgresHotelReader, PostgresSessionStore, PostgresTicketingReader};
