//! HTTP handlers for hotel endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::hotels::{
    ListHotelsHandler, ListHotelsQuery, ListRoomsHandler, ListRoomsQuery,
};
use crate::domain::foundation::{ErrorCode, HotelId};
use crate::domain::ticketing::HotelAccessError;
use crate::ports::{HotelReader, TicketingReader};

use super::dto::{ErrorResponse, HotelResponse, HotelWithRoomsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the hotel routes.
#[derive(Clone)]
pub struct HotelsAppState {
    pub ticketing_reader: Arc<dyn TicketingReader>,
    pub hotel_reader: Arc<dyn HotelReader>,
}

impl HotelsAppState {
    pub fn list_hotels_handler(&self) -> ListHotelsHandler {
        ListHotelsHandler::new(self.ticketing_reader.clone(), self.hotel_reader.clone())
    }

    pub fn list_rooms_handler(&self) -> ListRoomsHandler {
        ListRoomsHandler::new(self.ticketing_reader.clone(), self.hotel_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /hotels - List every hotel
pub async fn list_hotels(
    State(state): State<HotelsAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, HotelsApiError> {
    let query = ListHotelsQuery { user_id: user.id };

    let hotels = state.list_hotels_handler().handle(query).await?;

    let response: Vec<HotelResponse> = hotels.into_iter().map(HotelResponse::from).collect();
    Ok(Json(response))
}

/// GET /hotels/:hotel_id - One hotel with its rooms, or `[]` if unknown
pub async fn list_rooms(
    State(state): State<HotelsAppState>,
    RequireAuth(user): RequireAuth,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, HotelsApiError> {
    // Non-positive ids cannot match a row; the reader answers with no hotels.
    let hotel_id = hotel_id
        .parse::<i32>()
        .map(HotelId::from_raw)
        .map_err(|_| HotelsApiError::InvalidHotelId(hotel_id))?;

    let query = ListRoomsQuery {
        user_id: user.id,
        hotel_id,
    };

    let hotels = state.list_rooms_handler().handle(query).await?;

    let response: Vec<HotelWithRoomsResponse> = hotels
        .into_iter()
        .map(HotelWithRoomsResponse::from)
        .collect();
    Ok(Json(response))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts access errors to HTTP responses.
///
/// Every refusal produces the same 404 body.
#[derive(Debug)]
pub enum HotelsApiError {
    Access(HotelAccessError),
    /// The `:hotel_id` segment is not an integer.
    InvalidHotelId(String),
}

impl From<HotelAccessError> for HotelsApiError {
    fn from(err: HotelAccessError) -> Self {
        HotelsApiError::Access(err)
    }
}

impl IntoResponse for HotelsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            HotelsApiError::InvalidHotelId(raw) => {
                tracing::debug!(hotel_id = %raw, "Rejected non-numeric hotel id");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("BAD_REQUEST", "Invalid hotel id"),
                )
            }
            HotelsApiError::Access(err) => match err.code() {
                ErrorCode::NotFound => (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("NOT_FOUND", "No result for this search!"),
                ),
                ErrorCode::DatabaseError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
                ),
            },
        };

        (status, Json(body)).into_response()
    }
}
