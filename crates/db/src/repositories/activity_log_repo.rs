//! Repository for the `activity_logs` table.
//!
//! Insert and query only: the activity trail is append-only by construction,
//! so no update or delete statement exists here.

use sqlx::PgPool;

use crate::models::activity_log::{ActivityLog, ActivityQuery, CreateActivityLog};

const COLUMNS: &str = "id, actor_id, action, description, entity_type, entity_id, created_at";

/// Optional-filter clause: a NULL parameter leaves that dimension unfiltered.
const FILTER: &str = "($1::bigint IS NULL OR actor_id = $1)
    AND ($2::text IS NULL OR action = $2)
    AND ($3::text IS NULL OR entity_type = $3)";

/// Provides append and query operations for the activity trail.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Append one entry, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateActivityLog,
    ) -> Result<ActivityLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_logs (actor_id, action, description, entity_type, entity_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(input.actor_id)
            .bind(&input.action)
            .bind(&input.description)
            .bind(&input.entity_type)
            .bind(input.entity_id)
            .fetch_one(pool)
            .await
    }

    /// Query entries with optional filters and pagination, newest first.
    pub async fn query(
        pool: &PgPool,
        params: &ActivityQuery,
    ) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let limit = params.limit.unwrap_or(50).clamp(1, 500);
        let offset = params.offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {COLUMNS} FROM activity_logs
             WHERE {FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(params.actor_id)
            .bind(&params.action)
            .bind(&params.entity_type)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count entries matching the given filter (for pagination metadata).
    pub async fn count(pool: &PgPool, params: &ActivityQuery) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*)::BIGINT FROM activity_logs WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(params.actor_id)
            .bind(&params.action)
            .bind(&params.entity_type)
            .fetch_one(pool)
            .await
    }
}
