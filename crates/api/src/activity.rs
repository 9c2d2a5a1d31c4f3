//! Best-effort activity recording.
//!
//! Called after a mutation has succeeded, never before. A failed append is
//! logged and swallowed: the activity trail must not fail or roll back the
//! primary response.

use lexcase_core::types::DbId;
use lexcase_db::models::activity_log::CreateActivityLog;
use lexcase_db::repositories::ActivityLogRepo;
use lexcase_db::DbPool;

/// Append one activity entry for a completed mutation.
pub async fn record(
    pool: &DbPool,
    actor_id: DbId,
    action: &str,
    description: String,
    entity_type: &str,
    entity_id: Option<DbId>,
) {
    let entry = CreateActivityLog {
        actor_id: Some(actor_id),
        action: action.to_string(),
        description,
        entity_type: Some(entity_type.to_string()),
        entity_id,
    };

    if let Err(err) = ActivityLogRepo::insert(pool, &entry).await {
        tracing::warn!(error = %err, action, "Failed to append activity log entry");
    }
}
