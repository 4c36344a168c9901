//! In-memory implementation of `TicketingReader`.
//!
//! Stands in for Postgres in tests. Records are seeded with
//! the builder methods; `failing` turns every query into a database error.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EnrollmentId, ErrorCode, TicketId, UserId};
use crate::domain::ticketing::{Enrollment, Ticket, TicketType, TicketWithType};
use crate::ports::TicketingReader;

#[derive(Debug, Default)]
struct Tables {
    enrollments: Vec<Enrollment>,
    tickets: Vec<Ticket>,
    ticket_types: Vec<TicketType>,
}

/// In-memory enrollment and ticket tables.
#[derive(Debug, Default)]
pub struct InMemoryTicketingStore {
    tables: RwLock<Tables>,
    failure: Option<String>,
}

impl InMemoryTicketingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every query fails with a database error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            tables: RwLock::default(),
            failure: Some(message.into()),
        }
    }

    pub fn with_enrollment(mut self, enrollment: Enrollment) -> Self {
        self.tables.get_mut().enrollments.push(enrollment);
        self
    }

    pub fn with_ticket_type(mut self, ticket_type: TicketType) -> Self {
        self.tables.get_mut().ticket_types.push(ticket_type);
        self
    }

    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.tables.get_mut().tickets.push(ticket);
        self
    }

    /// Inserts or replaces a ticket, e.g. to simulate a payment landing.
    pub async fn set_ticket(&self, ticket: Ticket) {
        let mut tables = self.tables.write().await;
        tables.tickets.retain(|t| t.id != ticket.id);
        tables.tickets.push(ticket);
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::new(ErrorCode::DatabaseError, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TicketingReader for InMemoryTicketingStore {
    async fn find_enrollment_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        self.check_failure()?;
        let tables = self.tables.read().await;
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .min_by_key(|e| e.id)
            .cloned())
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        self.check_failure()?;
        let tables = self.tables.read().await;
        Ok(tables
            .tickets
            .iter()
            .filter(|t| t.enrollment_id == enrollment_id)
            .min_by_key(|t| t.id)
            .cloned())
    }

    async fn find_ticket_with_type(
        &self,
        ticket_id: TicketId,
    ) -> Result<Option<TicketWithType>, DomainError> {
        self.check_failure()?;
        let tables = self.tables.read().await;
        // Inner join: a ticket without its type row yields nothing.
        let joined = tables
            .tickets
            .iter()
            .filter(|t| t.id == ticket_id)
            .find_map(|ticket| {
                tables
                    .ticket_types
                    .iter()
                    .find(|tt| tt.id == ticket.ticket_type_id)
                    .map(|tt| TicketWithType::new(ticket.clone(), tt.clone()))
            });

        Ok(joined)
    }
}
