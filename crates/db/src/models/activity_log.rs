//! Activity log entity model and DTOs.
//!
//! Rows are append-only: there is no update DTO and no delete path.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexcase_core::types::{DbId, Timestamp};

/// A single activity log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityLog {
    pub id: DbId,
    pub actor_id: Option<DbId>,
    pub action: String,
    pub description: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for appending an activity log entry.
#[derive(Debug, Clone)]
pub struct CreateActivityLog {
    pub actor_id: Option<DbId>,
    pub action: String,
    pub description: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<DbId>,
}

/// Filter parameters for the admin activity listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityQuery {
    pub actor_id: Option<DbId>,
    pub action: Option<String>,
    pub entity_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
