//! Repository for the `messages` table.

use sqlx::PgPool;

use lexcase_core::types::DbId;

use crate::models::message::{CreateMessage, Message};

const COLUMNS: &str = "id, case_id, sender_id, recipient_id, body, read_at, created_at";

/// Provides send/list/read operations for messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert a new message, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMessage,
        sender_id: DbId,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (case_id, sender_id, recipient_id, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(input.case_id)
            .bind(sender_id)
            .bind(input.recipient_id)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find a message by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Message>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM messages WHERE id = $1");
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the messages a user participates in (sent or received), newest
    /// first. Participants-only visibility is enforced here, not in the
    /// handler.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Message>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM messages
             WHERE sender_id = $1 OR recipient_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Stamp a message as read by its recipient. Returns the updated row, or
    /// `None` if the id does not name a message addressed to `recipient_id`.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
        recipient_id: DbId,
    ) -> Result<Option<Message>, sqlx::Error> {
        let query = format!(
            "UPDATE messages SET read_at = COALESCE(read_at, NOW())
             WHERE id = $1 AND recipient_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(id)
            .bind(recipient_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a message by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
