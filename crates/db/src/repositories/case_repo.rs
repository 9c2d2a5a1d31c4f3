//! Repository for the `cases` table.

use sqlx::PgPool;

use lexcase_core::types::DbId;

use crate::models::case::{Case, CreateCase, UpdateCase};

const COLUMNS: &str = "id, reference, title, description, client_id, case_type_id, \
     lawyer_id, status, opened_on, created_at, updated_at";

/// Provides CRUD operations for cases.
pub struct CaseRepo;

impl CaseRepo {
    /// Insert a new case, returning the created row.
    ///
    /// `status` defaults to `open` and `opened_on` to today when omitted.
    pub async fn create(pool: &PgPool, input: &CreateCase) -> Result<Case, sqlx::Error> {
        let query = format!(
            "INSERT INTO cases (reference, title, description, client_id, case_type_id,
                                lawyer_id, status, opened_on)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'open'), COALESCE($8, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(&input.reference)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.client_id)
            .bind(input.case_type_id)
            .bind(input.lawyer_id)
            .bind(&input.status)
            .bind(input.opened_on)
            .fetch_one(pool)
            .await
    }

    /// Find a case by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases WHERE id = $1");
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cases, most recently opened first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases ORDER BY opened_on DESC, id DESC");
        sqlx::query_as::<_, Case>(&query).fetch_all(pool).await
    }

    /// List the cases belonging to one client, most recently opened first.
    pub async fn list_by_client(pool: &PgPool, client_id: DbId) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cases WHERE client_id = $1 ORDER BY opened_on DESC, id DESC"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update a case. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCase,
    ) -> Result<Option<Case>, sqlx::Error> {
        let query = format!(
            "UPDATE cases SET
                reference = COALESCE($2, reference),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                client_id = COALESCE($5, client_id),
                case_type_id = COALESCE($6, case_type_id),
                lawyer_id = COALESCE($7, lawyer_id),
                status = COALESCE($8, status),
                opened_on = COALESCE($9, opened_on),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .bind(&input.reference)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.client_id)
            .bind(input.case_type_id)
            .bind(input.lawyer_id)
            .bind(&input.status)
            .bind(input.opened_on)
            .fetch_optional(pool)
            .await
    }

    /// Delete a case by ID. Returns `true` if a row was removed. Cases with
    /// documents, schedules, messages, or invoices attached are blocked by
    /// the FK and surface as a storage error to the caller.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
