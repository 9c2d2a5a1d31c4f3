//! Repository for the `case_types` table.

use sqlx::PgPool;

use lexcase_core::types::DbId;

use crate::models::case_type::{CaseType, CreateCaseType, UpdateCaseType};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for case types.
pub struct CaseTypeRepo;

impl CaseTypeRepo {
    /// Insert a new case type, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCaseType) -> Result<CaseType, sqlx::Error> {
        let query = format!(
            "INSERT INTO case_types (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CaseType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a case type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CaseType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM case_types WHERE id = $1");
        sqlx::query_as::<_, CaseType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all case types ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CaseType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM case_types ORDER BY name");
        sqlx::query_as::<_, CaseType>(&query).fetch_all(pool).await
    }

    /// Update a case type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCaseType,
    ) -> Result<Option<CaseType>, sqlx::Error> {
        let query = format!(
            "UPDATE case_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CaseType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a case type by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM case_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
