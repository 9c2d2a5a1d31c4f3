//! Message entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexcase_core::types::{DbId, Timestamp};

/// A message row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub case_id: Option<DbId>,
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub body: String,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for sending a message. The sender is the authenticated caller, never
/// part of the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessage {
    pub case_id: Option<DbId>,
    pub recipient_id: DbId,
    pub body: String,
}
