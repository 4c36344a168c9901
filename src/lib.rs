//! Ticket Hotels - Hotel listings for conference ticket holders
//!
//! Serves the hotel catalogue and per-hotel rooms to users whose enrollment
//! holds a paid ticket with hotel accommodation included.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
