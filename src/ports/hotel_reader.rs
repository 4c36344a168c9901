//! Hotel reader port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, HotelId};
use crate::domain::lodging::{Hotel, HotelWithRooms};

/// Reader port for hotel listings.
#[async_trait]
pub trait HotelReader: Send + Sync {
    /// All hotels, in storage order.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, DomainError>;

    /// Hotels matching `hotel_id`, each with its rooms.
    ///
    /// Returns an empty vector when the id matches nothing; callers decide
    /// whether that is an error.
    async fn find_hotel_with_rooms(
        &self,
        hotel_id: HotelId,
    ) -> Result<Vec<HotelWithRooms>, DomainError>;
}
