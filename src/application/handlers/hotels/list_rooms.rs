//! ListRoomsHandler - Query handler for one hotel and its rooms.

use std::sync::Arc;

use crate::domain::foundation::{HotelId, UserId};
use crate::domain::lodging::HotelWithRooms;
use crate::domain::ticketing::HotelAccessError;
use crate::ports::{HotelReader, TicketingReader};

use super::CheckHotelEligibilityHandler;

/// Query to fetch a hotel together with its rooms.
#[derive(Debug, Clone)]
pub struct ListRoomsQuery {
    pub user_id: UserId,
    pub hotel_id: HotelId,
}

/// Handler for a hotel's rooms.
///
/// Returns zero or one `HotelWithRooms`; an unknown hotel is an empty list,
/// not an error.
pub struct ListRoomsHandler {
    eligibility: CheckHotelEligibilityHandler,
    hotels: Arc<dyn HotelReader>,
}

impl ListRoomsHandler {
    pub fn new(ticketing: Arc<dyn TicketingReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            eligibility: CheckHotelEligibilityHandler::new(ticketing),
            hotels,
        }
    }

    pub async fn handle(
        &self,
        query: ListRoomsQuery,
    ) -> Result<Vec<HotelWithRooms>, HotelAccessError> {
        self.eligibility.handle(query.user_id).await?;

        let hotels = self
            .hotels
            .find_hotel_with_rooms(query.hotel_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    user_id = %query.user_id,
                    hotel_id = %query.hotel_id,
                    error = %e,
                    "failed to load hotel rooms"
                );
                HotelAccessError::from(e)
            })?;

        if hotels.is_empty() {
            tracing::debug!(hotel_id = %query.hotel_id, "no hotel with requested id");
        }

        Ok(hotels)
    }
}
