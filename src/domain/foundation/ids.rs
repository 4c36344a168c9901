//! Strongly-typed identifier value objects.
//!
//! All records in the ticketing schema use serial integer keys, so each
//! identifier wraps an `i32`.

use std::fmt;

use super::ValidationError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw key, rejecting non-positive values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::invalid_format(
                        $field,
                        format!("must be a positive integer, got {}", value),
                    ));
                }
                Ok(Self(value))
            }

            /// Wraps a key read back from storage without validation.
            pub fn from_raw(value: i32) -> Self {
                Self(value)
            }

            /// Returns the inner key.
            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a registered user.
    UserId,
    "user_id"
);

numeric_id!(
    /// Identifier of a user's enrollment in the event.
    EnrollmentId,
    "enrollment_id"
);

numeric_id!(
    /// Identifier of a purchased ticket.
    TicketId,
    "ticket_id"
);

numeric_id!(
    /// Identifier of a ticket category.
    TicketTypeId,
    "ticket_type_id"
);

numeric_id!(
    /// Identifier of a partner hotel.
    HotelId,
    "hotel_id"
);

numeric_id!(RoomId, "room_id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_values() {
        let id = UserId::new(42).unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn new_rejects_zero_and_negative() {
        assert!(HotelId::new(0).is_err());
        assert!(HotelId::new(-7).is_err());
    }

    #[test]
    fn from_raw_skips_validation() {
        assert_eq!(HotelId::from_raw(0).value(), 0);
    }

    #[test]
    fn rejection_names_the_field() {
        let err = EnrollmentId::new(0).unwrap_err();
        assert!(err.to_string().contains("enrollment_id"));
    }

    #[test]
    fn displays_inner_value() {
        assert_eq!(RoomId::from_raw(9).to_string(), "9");
    }
}
