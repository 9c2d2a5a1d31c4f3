//! Route definitions for `/invoices`.

use axum::routing::get;
use axum::Router;

use crate::handlers::invoices;
use crate::state::AppState;

/// Routes mounted at `/invoices`.
///
/// ```text
/// GET    /        -> list (client role sees own-case invoices only)
/// POST   /        -> create (partner or admin)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (partner or admin)
/// DELETE /{id}    -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(invoices::list).post(invoices::create))
        .route(
            "/{id}",
            get(invoices::get_by_id)
                .put(invoices::update)
                .delete(invoices::delete),
        )
}
