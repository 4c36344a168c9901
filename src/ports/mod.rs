//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Resolves a bearer token to a user
//! - `SessionStore` - Open sessions keyed by token
//!
//! ## Read Ports
//!
//! - `TicketingReader` - Enrollment and ticket lookups for the hotel gate
//! - `HotelReader` - Hotel and room listings

mod hotel_reader;
mod session_store;
mod session_validator;
mod ticketing_reader;

pub use hotel_reader::HotelReader;
pub use session_store::SessionStore;
pub use session_validator::SessionValidator;
pub use ticketing_reader::TicketingReader;
