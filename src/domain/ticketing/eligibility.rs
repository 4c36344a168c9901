//! Hotel eligibility rule.
//!
//! A ticket grants access to hotel listings only when its type includes
//! accommodation and it is no longer merely reserved.

use super::{Enrollment, HotelAccessError, TicketWithType};

/// Everything resolved on the way to a passing eligibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketContext {
    pub enrollment: Enrollment,
    pub ticket: TicketWithType,
}

/// Applies the hotel access rule to a resolved ticket.
///
/// The type check runs first: an unpaid ticket of a non-hotel type reports
/// `HotelNotIncluded`.
pub fn check_hotel_access(ticket: &TicketWithType) -> Result<(), HotelAccessError> {
    if !ticket.includes_hotel() {
        return Err(HotelAccessError::HotelNotIncluded(ticket.ticket.id));
    }
    if ticket.status().is_reserved() {
        return Err(HotelAccessError::TicketNotPaid(ticket.ticket.id));
    }
    Ok(())
}
