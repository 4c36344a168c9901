//! PostgreSQL adapters - Database implementations for the read ports.
//!
//! - `PostgresTicketingReader` - Enrollment, ticket and ticket type lookups
//! - `PostgresHotelReader` - Hotel and room queries
//! - `PostgresSessionStore` - Session rows written at sign-in

mod hotel_reader;
mod pool;
mod session_store;
mod ticketing_reader;

pub use hotel_reader::PostgresHotelReader;
pub use pool::{connect_pool, run_migrations};
pub use session_store::PostgresSessionStore;
pub use ticketing_reader::PostgresTicketingReader;
