//! Enrollment, ticket and ticket type records as read by the hotel gate.

use crate::domain::foundation::{
    EnrollmentId, TicketId, TicketTypeId, Timestamp, UserId,
};

use super::TicketStatus;

/// A user's registration for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
}

/// A ticket bought (or reserved) under an enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type_id: TicketTypeId,
    pub status: TicketStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category of ticket, with its price in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A ticket joined with its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketWithType {
    pub ticket: Ticket,
    pub ticket_type: TicketType,
}

impl TicketWithType {
    pub fn new(ticket: Ticket, ticket_type: TicketType) -> Self {
        Self { ticket, ticket_type }
    }

    pub fn status(&self) -> TicketStatus {
        self.ticket.status
    }

    pub fn includes_hotel(&self) -> bool {
        self.ticket_type.includes_hotel
    }
}
