//! In-memory implementation of `HotelReader`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, HotelId};
use crate::domain::lodging::{Hotel, HotelWithRooms, Room};
use crate::ports::HotelReader;

#[derive(Debug, Default)]
struct Tables {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
}

/// In-memory hotel and room tables, kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryHotelStore {
    tables: RwLock<Tables>,
    failure: Option<String>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every query fails with a database error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            tables: RwLock::default(),
            failure: Some(message.into()),
        }
    }

    pub fn with_hotel(mut self, hotel: Hotel) -> Self {
        self.tables.get_mut().hotels.push(hotel);
        self
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.tables.get_mut().rooms.push(room);
        self
    }

    pub async fn add_hotel(&self, hotel: Hotel) {
        self.tables.write().await.hotels.push(hotel);
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::new(ErrorCode::DatabaseError, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HotelReader for InMemoryHotelStore {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError> {
        self.check_failure()?;
        Ok(self.tables.read().await.hotels.clone())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Vec<HotelWithRooms>, DomainError> {
        self.check_failure()?;
        let tables = self.tables.read().await;
        Ok(tables
            .hotels
            .iter()
            .filter(|h| h.id == hotel_id)
            .map(|hotel| {
                let rooms = tables
                    .rooms
                    .iter()
                    .filter(|r| r.hotel_id == hotel.id)
                    .cloned()
                    .collect();
                HotelWithRooms::new(hotel.clone(), rooms)
            })
            .collect())
    }
}
