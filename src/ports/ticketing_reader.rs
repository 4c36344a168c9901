//! Ticketing reader port.
//!
//! Read-only lookups used to resolve a user's ticket before any hotel data
//! is served. Each step depends on the result of the previous one, so the
//! gate calls them strictly in order.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EnrollmentId, TicketId, UserId};
use crate::domain::ticketing::{Enrollment, Ticket, TicketWithType};

/// Reader port for enrollment and ticket queries.
#[async_trait]
pub trait TicketingReader: Send + Sync {
    /// First enrollment belonging to the user, or `None`.
    ///
    /// Uniqueness per user is not assumed; when several exist the
    /// lowest id wins.
    async fn find_enrollment_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, DomainError>;

    /// Ticket attached to the enrollment, or `None`.
    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError>;

    /// Ticket joined with its type, or `None`.
    async fn find_ticket_with_type(
        &self,
        ticket_id: TicketId,
    ) -> Result<Option<TicketWithType>, DomainError>;
}
