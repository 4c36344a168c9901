//! Ticket payment status.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Payment status of a ticket.
///
/// Stored as the Postgres enum `"TicketStatus"` with upper-case labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    /// Ticket is held for the user but has not been paid for yet.
    Reserved,

    /// Payment has been confirmed.
    Paid,
}

impl TicketStatus {
    /// Returns true while the ticket is still awaiting payment.
    pub fn is_reserved(&self) -> bool {
        matches!(self, TicketStatus::Reserved)
    }

    /// Database/wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RESERVED" => Ok(TicketStatus::Reserved),
            "PAID" => Ok(TicketStatus::Paid),
            other => Err(ValidationError::invalid_format(
                "ticket_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
