//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth types and error types that
//! the ticketing and lodging modules build on.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId};
pub use timestamp::Timestamp;
