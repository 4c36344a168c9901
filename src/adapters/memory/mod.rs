//! In-memory adapters for the read ports.
//!
//! Test doubles for the Postgres adapters, seeded with builder methods.

mod hotel_store;
mod session_store;
mod ticketing_store;

pub use hotel_store::InMemoryHotelStore;
pub use session_store::InMemorySessionStore;
pub use ticketing_store::InMemoryTicketingStore;
