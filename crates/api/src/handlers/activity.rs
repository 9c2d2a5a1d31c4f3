//! Handlers for the `/activity` resource (admin-only audit trail reads).
//!
//! The trail itself is written by [`crate::activity::record`] as a side
//! effect of mutations; this module only exposes querying.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use lexcase_db::models::activity_log::{ActivityLog, ActivityQuery};
use lexcase_db::repositories::ActivityLogRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response for `GET /activity`: one page plus the total match count.
#[derive(Debug, Serialize)]
pub struct ActivityPageResponse {
    pub message: String,
    pub records: Vec<ActivityLog>,
    pub total: i64,
}

/// GET /api/v1/activity
///
/// Query the activity trail with optional actor/action/entity filters and
/// limit/offset pagination. Admin only.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ActivityQuery>,
) -> AppResult<Json<ActivityPageResponse>> {
    let records = ActivityLogRepo::query(&state.pool, &params).await?;
    let total = ActivityLogRepo::count(&state.pool, &params).await?;

    Ok(Json(ActivityPageResponse {
        message: "Activity log".into(),
        records,
        total,
    }))
}
