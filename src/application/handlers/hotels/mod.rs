//! Hotel query handlers.
//!
//! Both queries run the same eligibility gate before touching hotel data.

mod check_eligibility;
mod list_hotels;
mod list_rooms;

pub use check_eligibility::CheckHotelEligibilityHandler;
pub use list_hotels::{ListHotelsHandler, ListHotelsQuery};
pub use list_rooms::{ListRoomsHandler, ListRoomsQuery};
