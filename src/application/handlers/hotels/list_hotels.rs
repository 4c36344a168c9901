//! ListHotelsHandler - Query handler for the hotel catalogue.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::lodging::Hotel;
use crate::domain::ticketing::HotelAccessError;
use crate::ports::{HotelReader, TicketingReader};

use super::CheckHotelEligibilityHandler;

/// Query to list every hotel.
#[derive(Debug, Clone)]
pub struct ListHotelsQuery {
    pub user_id: UserId,
}

/// Handler for listing hotels to ticket holders.
pub struct ListHotelsHandler {
    eligibility: CheckHotelEligibilityHandler,
    hotels: Arc<dyn HotelReader>,
}

impl ListHotelsHandler {
    pub fn new(ticketing: Arc<dyn TicketingReader>, hotels: Arc<dyn HotelReader>) -> Self {
        Self {
            eligibility: CheckHotelEligibilityHandler::new(ticketing),
            hotels,
        }
    }

    pub async fn handle(&self, query: ListHotelsQuery) -> Result<Vec<Hotel>, HotelAccessError> {
        self.eligibility.handle(query.user_id).await?;

        let hotels = self.hotels.list_hotels().await.map_err(|e| {
            tracing::error!(user_id = %query.user_id, error = %e, "failed to list hotels");
            HotelAccessError::from(e)
        })?;

        Ok(hotels)
    }
}
