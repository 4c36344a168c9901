//! PostgreSQL implementation of TicketingReader.
//!
//! Tables follow the Prisma naming of the ticketing service: quoted
//! PascalCase table names, camelCase columns, and `TIMESTAMP(3)` columns
//! holding naive UTC.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::domain::foundation::{
    DomainError, EnrollmentId, ErrorCode, TicketId, TicketTypeId, Timestamp, UserId,
};
use crate::domain::ticketing::{Enrollment, Ticket, TicketStatus, TicketType, TicketWithType};
use crate::ports::TicketingReader;

/// PostgreSQL implementation of the TicketingReader port.
pub struct PostgresTicketingReader {
    pool: PgPool,
}

impl PostgresTicketingReader {
    /// Creates a new PostgresTicketingReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

/// Row for the ticket + ticket type join.
#[derive(Debug, sqlx::FromRow)]
struct TicketWithTypeRow {
    id: i32,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    type_name: String,
    type_price: i32,
    type_is_remote: bool,
    type_includes_hotel: bool,
    type_created_at: NaiveDateTime,
    type_updated_at: NaiveDateTime,
}

pub(super) fn utc(dt: NaiveDateTime) -> Timestamp {
    Timestamp::from_datetime(dt.and_utc())
}

fn parse_status(s: &str) -> Result<TicketStatus, DomainError> {
    s.parse::<TicketStatus>().map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid ticket status value: {}", e),
        )
    })
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            id: EnrollmentId::from_raw(row.id),
            user_id: UserId::from_raw(row.user_id),
        }
    }
}

impl TryFrom<TicketRow> for Ticket {
    type Error = DomainError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        Ok(Ticket {
            id: TicketId::from_raw(row.id),
            enrollment_id: EnrollmentId::from_raw(row.enrollment_id),
            ticket_type_id: TicketTypeId::from_raw(row.ticket_type_id),
            status: parse_status(&row.status)?,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        })
    }
}

impl TryFrom<TicketWithTypeRow> for TicketWithType {
    type Error = DomainError;

    fn try_from(row: TicketWithTypeRow) -> Result<Self, Self::Error> {
        let ticket_type = TicketType {
            id: TicketTypeId::from_raw(row.ticket_type_id),
            name: row.type_name,
            price: row.type_price,
            is_remote: row.type_is_remote,
            includes_hotel: row.type_includes_hotel,
            created_at: utc(row.type_created_at),
            updated_at: utc(row.type_updated_at),
        };
        let ticket = Ticket {
            id: TicketId::from_raw(row.id),
            enrollment_id: EnrollmentId::from_raw(row.enrollment_id),
            ticket_type_id: TicketTypeId::from_raw(row.ticket_type_id),
            status: parse_status(&row.status)?,
            created_at: utc(row.created_at),
            updated_at: utc(row.updated_at),
        };
        Ok(TicketWithType::new(ticket, ticket_type))
    }
}

#[async_trait]
impl TicketingReader for PostgresTicketingReader {
    async fn find_enrollment_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Enrollment>, DomainError> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
            SELECT id, "userId" AS user_id
            FROM "Enrollment"
            WHERE "userId" = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find enrollment", e))?;

        Ok(row.map(Enrollment::from))
    }

    async fn find_ticket_by_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, DomainError> {
        let row: Option<TicketRow> = sqlx::query_as(
            r#"
            SELECT id,
                   "enrollmentId" AS enrollment_id,
                   "ticketTypeId" AS ticket_type_id,
                   status::text AS status,
                   "createdAt" AS created_at,
                   "updatedAt" AS updated_at
            FROM "Ticket"
            WHERE "enrollmentId" = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(enrollment_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find ticket", e))?;

        row.map(Ticket::try_from).transpose()
    }

    async fn find_ticket_with_type(
        &self,
        ticket_id: TicketId,
    ) -> Result<Option<TicketWithType>, DomainError> {
        let row: Option<TicketWithTypeRow> = sqlx::query_as(
            r#"
            SELECT t.id,
                   t."enrollmentId" AS enrollment_id,
                   t."ticketTypeId" AS ticket_type_id,
                   t.status::text AS status,
                   t."createdAt" AS created_at,
                   t."updatedAt" AS updated_at,
                   tt.name AS type_name,
                   tt.price AS type_price,
                   tt."isRemote" AS type_is_remote,
                   tt."includesHotel" AS type_includes_hotel,
                   tt."createdAt" AS type_created_at,
                   tt."updatedAt" AS type_updated_at
            FROM "Ticket" t
            JOIN "TicketType" tt ON tt.id = t."ticketTypeId"
            WHERE t.id = $1
            "#,
        )
        .bind(ticket_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load ticket type", e))?;

        row.map(TicketWithType::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_milli_opt(12, 30, 0, 250))
            .unwrap()
    }

    #[test]
    fn ticket_row_maps_to_domain() {
        let row = TicketRow {
            id: 4,
            enrollment_id: 2,
            ticket_type_id: 1,
            status: "PAID".to_string(),
            created_at: naive(),
            updated_at: naive(),
        };

        let ticket = Ticket::try_from(row).unwrap();

        assert_eq!(ticket.id.value(), 4);
        assert_eq!(ticket.status, TicketStatus::Paid);
        assert_eq!(ticket.created_at.to_rfc3339(), "2024-03-01T12:30:00.250Z");
    }

    #[test]
    fn unknown_status_is_a_database_error() {
        let row = TicketRow {
            id: 4,
            enrollment_id: 2,
            ticket_type_id: 1,
            status: "REFUNDED".to_string(),
            created_at: naive(),
            updated_at: naive(),
        };

        let err = Ticket::try_from(row).unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn joined_row_carries_type_flags() {
        let row = TicketWithTypeRow {
            id: 4,
            enrollment_id: 2,
            ticket_type_id: 9,
            status: "RESERVED".to_string(),
            created_at: naive(),
            updated_at: naive(),
            type_name: "Online".to_string(),
            type_price: 10000,
            type_is_remote: true,
            type_includes_hotel: false,
            type_created_at: naive(),
            type_updated_at: naive(),
        };

        let joined = TicketWithType::try_from(row).unwrap();

        assert_eq!(joined.ticket_type.id.value(), 9);
        assert!(joined.ticket_type.is_remote);
        assert!(!joined.includes_hotel());
        assert!(joined.status().is_reserved());
    }
}
