//! CheckHotelEligibilityHandler - Resolves a user's ticket and applies the
//! hotel access rule.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::ticketing::{check_hotel_access, HotelAccessError, TicketContext};
use crate::ports::TicketingReader;

/// Gate shared by every hotel query.
///
/// Walks user → enrollment → ticket → ticket type with one lookup each and
/// stops at the first missing record.
pub struct CheckHotelEligibilityHandler {
    reader: Arc<dyn TicketingReader>,
}

impl CheckHotelEligibilityHandler {
    pub fn new(reader: Arc<dyn TicketingReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<TicketContext, HotelAccessError> {
        let result = self.resolve(user_id).await;

        match &result {
            Ok(context) => tracing::debug!(
                user_id = %user_id,
                ticket_id = %context.ticket.ticket.id,
                "hotel access granted"
            ),
            Err(HotelAccessError::Infrastructure(msg)) => tracing::error!(
                user_id = %user_id,
                error = %msg,
                "hotel eligibility lookup failed"
            ),
            Err(err) => tracing::debug!(
                user_id = %user_id,
                reason = err.reason(),
                "hotel access refused"
            ),
        }

        result
    }

    async fn resolve(&self, user_id: UserId) -> Result<TicketContext, HotelAccessError> {
        let enrollment = self
            .reader
            .find_enrollment_by_user(user_id)
            .await?
            .ok_or(HotelAccessError::EnrollmentNotFound(user_id))?;

        let ticket = self
            .reader
            .find_ticket_by_enrollment(enrollment.id)
            .await?
            .ok_or(HotelAccessError::TicketNotFound(enrollment.id))?;

        // The ticket was just read, so a vanished row means it was deleted
        // in between and is treated the same as never having existed.
        let ticket = self
            .reader
            .find_ticket_with_type(ticket.id)
            .await?
            .ok_or(HotelAccessError::TicketNotFound(enrollment.id))?;

        check_hotel_access(&ticket)?;

        Ok(TicketContext { enrollment, ticket })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTicketingStore;
    use crate::domain::foundation::{EnrollmentId, TicketId, TicketTypeId, Timestamp};
    use crate::domain::ticketing::{Enrollment, Ticket, TicketStatus, TicketType};

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn user() -> UserId {
        UserId::new(1).unwrap()
    }

    fn enrollment() -> Enrollment {
        Enrollment {
            id: EnrollmentId::new(10).unwrap(),
            user_id: user(),
        }
    }

    fn ticket_type(includes_hotel: bool) -> TicketType {
        let now = Timestamp::now();
        TicketType {
            id: TicketTypeId::new(3).unwrap(),
            name: "Presencial".to_string(),
            price: 60000,
            is_remote: false,
            includes_hotel,
            created_at: now,
            updated_at: now,
        }
    }

    fn ticket(status: TicketStatus) -> Ticket {
        let now = Timestamp::now();
        Ticket {
            id: TicketId::new(7).unwrap(),
            enrollment_id: EnrollmentId::new(10).unwrap(),
            ticket_type_id: TicketTypeId::new(3).unwrap(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn handler(store: InMemoryTicketingStore) -> CheckHotelEligibilityHandler {
        CheckHotelEligibilityHandler::new(Arc::new(store))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Refusals
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn refuses_user_without_enrollment() {
        let result = handler(InMemoryTicketingStore::new()).handle(user()).await;

        assert_eq!(result, Err(HotelAccessError::EnrollmentNotFound(user())));
    }

    #[tokio::test]
    async fn refuses_enrollment_without_ticket() {
        let store = InMemoryTicketingStore::new().with_enrollment(enrollment());

        let result = handler(store).handle(user()).await;

        assert_eq!(
            result,
            Err(HotelAccessError::TicketNotFound(EnrollmentId::new(10).unwrap()))
        );
    }

    #[tokio::test]
    async fn refuses_ticket_type_without_hotel() {
        let store = InMemoryTicketingStore::new()
            .with_enrollment(enrollment())
            .with_ticket_type(ticket_type(false))
            .with_ticket(ticket(TicketStatus::Paid));

        let result = handler(store).handle(user()).await;

        assert!(matches!(result, Err(HotelAccessError::HotelNotIncluded(_))));
    }

    #[tokio::test]
    async fn refuses_reserved_hotel_ticket() {
        let store = InMemoryTicketingStore::new()
            .with_enrollment(enrollment())
            .with_ticket_type(ticket_type(true))
            .with_ticket(ticket(TicketStatus::Reserved));

        let result = handler(store).handle(user()).await;

        assert!(matches!(result, Err(HotelAccessError::TicketNotPaid(_))));
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure() {
        let result = handler(InMemoryTicketingStore::failing("connection refused"))
            .handle(user())
            .await;

        match result {
            Err(HotelAccessError::Infrastructure(msg)) => {
                assert!(msg.contains("connection refused"))
            }
            other => panic!("expected infrastructure error, got {:?}", other),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Grants
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn grants_paid_hotel_ticket() {
        let store = InMemoryTicketingStore::new()
            .with_enrollment(enrollment())
            .with_ticket_type(ticket_type(true))
            .with_ticket(ticket(TicketStatus::Paid));

        let context = handler(store).handle(user()).await.unwrap();

        assert_eq!(context.enrollment, enrollment());
        assert_eq!(context.ticket.ticket.id.value(), 7);
        assert!(context.ticket.includes_hotel());
    }

    #[tokio::test]
    async fn decision_follows_payment() {
        let store = Arc::new(
            InMemoryTicketingStore::new()
                .with_enrollment(enrollment())
                .with_ticket_type(ticket_type(true))
                .with_ticket(ticket(TicketStatus::Reserved)),
        );
        let handler = CheckHotelEligibilityHandler::new(store.clone());

        assert!(handler.handle(user()).await.is_err());

        store.set_ticket(ticket(TicketStatus::Paid)).await;

        assert!(handler.handle(user()).await.is_ok());
    }
}
