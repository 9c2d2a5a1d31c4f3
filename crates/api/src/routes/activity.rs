//! Route definitions for `/activity` (admin-only audit trail reads).

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activity`.
///
/// ```text
/// GET /?actor_id=&action=&entity_type=&limit=&offset=   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(activity::list))
}
