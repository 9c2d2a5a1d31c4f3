//! Route definitions for `/messages`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// GET    /            -> list (participants only)
/// POST   /            -> create (send)
/// GET    /{id}        -> get_by_id (participants only)
/// DELETE /{id}        -> delete (sender or admin)
/// PUT    /{id}/read   -> mark_read (recipient only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(messages::list).post(messages::create))
        .route(
            "/{id}",
            get(messages::get_by_id).delete(messages::delete),
        )
        .route("/{id}/read", put(messages::mark_read))
}
