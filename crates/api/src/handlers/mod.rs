use lexcase_core::types::DbId;
use lexcase_db::repositories::ClientRepo;

use crate::error::AppResult;
use crate::state::AppState;

pub mod activity;
pub mod auth;
pub mod case_types;
pub mod cases;
pub mod clients;
pub mod documents;
pub mod invoices;
pub mod messages;
pub mod profile;
pub mod schedules;
pub mod users;

/// Resolve the client record linked to a client-role caller's login, if any.
/// Row-level restriction for client-role callers hangs off this id; an
/// unlinked login simply owns nothing.
pub(crate) async fn own_client_id(state: &AppState, user_id: DbId) -> AppResult<Option<DbId>> {
    Ok(ClientRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .map(|c| c.id))
}
