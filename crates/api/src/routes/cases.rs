//! Route definitions for `/cases`, including the nested document upload.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use lexcase_core::uploads::MAX_UPLOAD_BYTES;

use crate::handlers::{cases, documents};
use crate::state::AppState;

/// Routes mounted at `/cases`.
///
/// ```text
/// GET    /                        -> list (client role sees own cases only)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{case_id}/documents     -> documents::list_by_case
/// POST   /{case_id}/documents     -> documents::upload (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cases::list).post(cases::create))
        .route(
            "/{id}",
            get(cases::get_by_id)
                .put(cases::update)
                .delete(cases::delete),
        )
        .route(
            "/{case_id}/documents",
            get(documents::list_by_case)
                .post(documents::upload)
                // Room above the 5 MiB cap for multipart framing; the policy
                // check in core still enforces the exact limit with a 400.
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024)),
        )
}
