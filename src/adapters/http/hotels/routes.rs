//! Axum router configuration for hotel endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_hotels, list_rooms, HotelsAppState};

/// Create the hotels API router.
///
/// # Routes
///
/// Both require authentication (see `auth_middleware`).
/// - `GET /hotels` (or `/hotels/`) - Every hotel
/// - `GET /hotels/:hotel_id` - One hotel with nested rooms
pub fn hotels_router() -> Router<HotelsAppState> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/", get(list_hotels))
        .route("/hotels/:hotel_id", get(list_rooms))
}
