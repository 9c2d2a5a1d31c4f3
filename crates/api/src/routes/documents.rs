//! Route definitions for `/documents`. Upload lives under
//! `/cases/{case_id}/documents` (see [`super::cases`]).

use axum::routing::get;
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET    /        -> list (client role sees own-case documents only)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (metadata only)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(documents::list))
        .route(
            "/{id}",
            get(documents::get_by_id)
                .put(documents::update)
                .delete(documents::delete),
        )
}
