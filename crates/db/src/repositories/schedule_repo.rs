//! Repository for the `schedules` table.

use sqlx::PgPool;

use lexcase_core::types::DbId;

use crate::models::schedule::{CreateSchedule, Schedule, ScheduleRange, UpdateSchedule};

const COLUMNS: &str = "id, case_id, title, description, location, starts_at, ends_at, \
     created_by, created_at, updated_at";

const QUALIFIED_COLUMNS: &str = "s.id, s.case_id, s.title, s.description, s.location, \
     s.starts_at, s.ends_at, s.created_by, s.created_at, s.updated_at";

/// Overlap filter against an optional window: a row matches when its interval
/// intersects [start, end]; an omitted bound is unbounded.
const RANGE_FILTER: &str =
    "($1::timestamptz IS NULL OR ends_at >= $1) AND ($2::timestamptz IS NULL OR starts_at <= $2)";

/// Provides CRUD operations for schedule entries.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Insert a new schedule entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSchedule,
        created_by: DbId,
    ) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedules (case_id, title, description, location, starts_at, ends_at,
                                    created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(input.case_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a schedule entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules WHERE id = $1");
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List schedule entries overlapping the given window, soonest first.
    pub async fn list(pool: &PgPool, range: &ScheduleRange) -> Result<Vec<Schedule>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM schedules WHERE {RANGE_FILTER} ORDER BY starts_at");
        sqlx::query_as::<_, Schedule>(&query)
            .bind(range.start)
            .bind(range.end)
            .fetch_all(pool)
            .await
    }

    /// List the entries on one client's cases overlapping the given window.
    /// Row-level restriction for client-role callers; firm-wide entries with
    /// no case are not included.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
        range: &ScheduleRange,
    ) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM schedules s
             JOIN cases c ON c.id = s.case_id
             WHERE c.client_id = $3
               AND ($1::timestamptz IS NULL OR s.ends_at >= $1)
               AND ($2::timestamptz IS NULL OR s.starts_at <= $2)
             ORDER BY s.starts_at"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(range.start)
            .bind(range.end)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update a schedule entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchedule,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!(
            "UPDATE schedules SET
                case_id = COALESCE($2, case_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                location = COALESCE($5, location),
                starts_at = COALESCE($6, starts_at),
                ends_at = COALESCE($7, ends_at),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .bind(input.case_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a schedule entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
