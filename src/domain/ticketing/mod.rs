//! Ticketing domain module.
//!
//! Read-side view of enrollments and tickets, and the rule deciding whether
//! a ticket entitles its holder to hotel data.
//!
//! # Module Structure
//!
//! - `status` - TicketStatus payment states
//! - `ticket` - Enrollment, Ticket, TicketType records
//! - `eligibility` - Hotel access rule
//! - `errors` - HotelAccessError refusal reasons

mod eligibility;
mod errors;
mod status;
mod ticket;

pub use eligibility::{check_hotel_access, TicketContext};
pub use errors::HotelAccessError;
pub use status::TicketStatus;
pub use ticket::{Enrollment, Ticket, TicketType, TicketWithType};
