//! Lodging domain module.
//!
//! Hotels and rooms offered to attendees whose ticket includes accommodation.

mod hotel;

pub use hotel::{Hotel, HotelWithRooms, Room};
