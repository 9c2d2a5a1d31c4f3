//! Route definitions for `/profile` (the caller's own account).

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use lexcase_core::uploads::MAX_UPLOAD_BYTES;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// GET  /            -> get
/// PUT  /            -> update
/// PUT  /password    -> change_password
/// POST /picture     -> upload_picture (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get).put(profile::update))
        .route("/password", put(profile::change_password))
        .route(
            "/picture",
            post(profile::upload_picture)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024)),
        )
}
