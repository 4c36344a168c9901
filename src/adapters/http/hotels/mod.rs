//! HTTP adapter for hotel endpoints.
//!
//! - `GET /hotels` - Hotels available to the caller's ticket
//! - `GET /hotels/:hotel_id` - One hotel with its rooms

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{HotelsApiError, HotelsAppState};
pub use routes::hotels_router;
