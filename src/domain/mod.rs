//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `ticketing` - Enrollments, tickets and the hotel access rule
//! - `lodging` - Hotels and their rooms

pub mod foundation;
pub mod lodging;
pub mod ticketing;
