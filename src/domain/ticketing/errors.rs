//! Hotel access error types.
//!
//! Every way a user can be refused hotel data is a distinct variant so the
//! cause can be logged, while the HTTP layer collapses all of them except
//! `Infrastructure` into the same not-found response.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | EnrollmentNotFound | 404 |
//! | TicketNotFound | 404 |
//! | HotelNotIncluded | 404 |
//! | TicketNotPaid | 404 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, TicketId, UserId};

/// Reasons a user may not read hotel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelAccessError {
    /// The user has not enrolled in the event.
    EnrollmentNotFound(UserId),

    /// The enrollment has no ticket.
    TicketNotFound(EnrollmentId),

    /// The ticket's type does not include hotel accommodation.
    HotelNotIncluded(TicketId),

    /// The ticket is reserved but not yet paid.
    TicketNotPaid(TicketId),

    /// A port failed while resolving the ticket or reading hotels.
    Infrastructure(String),
}

impl HotelAccessError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        HotelAccessError::Infrastructure(message.into())
    }

    /// Returns true for refusals the caller must see as "not found".
    pub fn is_not_found(&self) -> bool {
        !matches!(self, HotelAccessError::Infrastructure(_))
    }

    /// Short machine-readable reason, used as a log field.
    pub fn reason(&self) -> &'static str {
        match self {
            HotelAccessError::EnrollmentNotFound(_) => "enrollment_not_found",
            HotelAccessError::TicketNotFound(_) => "ticket_not_found",
            HotelAccessError::HotelNotIncluded(_) => "hotel_not_included",
            HotelAccessError::TicketNotPaid(_) => "ticket_not_paid",
            HotelAccessError::Infrastructure(_) => "infrastructure",
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        if self.is_not_found() {
            ErrorCode::NotFound
        } else {
            ErrorCode::DatabaseError
        }
    }

    /// Returns a descriptive error message.
    pub fn message(&self) -> String {
        match self {
            HotelAccessError::EnrollmentNotFound(user_id) => {
                format!("No enrollment found for user {}", user_id)
            }
            HotelAccessError::TicketNotFound(enrollment_id) => {
                format!("No ticket found for enrollment {}", enrollment_id)
            }
            HotelAccessError::HotelNotIncluded(ticket_id) => {
                format!("Ticket {} does not include hotel accommodation", ticket_id)
            }
            HotelAccessError::TicketNotPaid(ticket_id) => {
                format!("Ticket {} has not been paid", ticket_id)
            }
            HotelAccessError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for HotelAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for HotelAccessError {}

impl From<DomainError> for HotelAccessError {
    fn from(err: DomainError) -> Self {
        HotelAccessError::Infrastructure(err.to_string())
    }
}
