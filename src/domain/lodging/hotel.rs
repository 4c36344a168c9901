//! Hotel and room records.

use crate::domain::foundation::{HotelId, RoomId, Timestamp};

/// A partner hotel offered to attendees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room inside a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A hotel together with all of its rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn new(hotel: Hotel, rooms: Vec<Room>) -> Self {
        Self { hotel, rooms }
    }
}

