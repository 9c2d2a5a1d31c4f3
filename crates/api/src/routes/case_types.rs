//! Route definitions for `/case-types`.

use axum::routing::get;
use axum::Router;

use crate::handlers::case_types;
use crate::state::AppState;

/// Routes mounted at `/case-types`.
///
/// ```text
/// GET    /        -> list (any authenticated user)
/// POST   /        -> create (admin only)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (admin only)
/// DELETE /{id}    -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(case_types::list).post(case_types::create))
        .route(
            "/{id}",
            get(case_types::get_by_id)
                .put(case_types::update)
                .delete(case_types::delete),
        )
}
