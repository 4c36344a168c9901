//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod hotels;

pub use hotels::{
    CheckHotelEligibilityHandler, ListHotelsHandler, ListHotelsQuery, ListRoomsHandler,
    ListRoomsQuery,
};
