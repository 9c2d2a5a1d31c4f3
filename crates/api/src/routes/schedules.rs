//! Route definitions for `/schedules`.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedules;
use crate::state::AppState;

/// Routes mounted at `/schedules`.
///
/// ```text
/// GET    /?start=&end=   -> list (window overlap; client role restricted)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(schedules::list).post(schedules::create))
        .route(
            "/{id}",
            get(schedules::get_by_id)
                .put(schedules::update)
                .delete(schedules::delete),
        )
}
