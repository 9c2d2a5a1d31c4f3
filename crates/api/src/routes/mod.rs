pub mod activity;
pub mod auth;
pub mod case_types;
pub mod cases;
pub mod clients;
pub mod documents;
pub mod health;
pub mod invoices;
pub mod messages;
pub mod profile;
pub mod schedules;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/me                             authenticated identity
///
/// /users                               list, create (admin only)
/// /users/{id}                          get, update, delete (admin only)
///
/// /clients                             list, create
/// /clients/{id}                        get, update, delete
///
/// /case-types                          list, create (create admin only)
/// /case-types/{id}                     get, update, delete (admin only)
///
/// /cases                               list, create
/// /cases/{id}                          get, update, delete
/// /cases/{case_id}/documents           list, upload (multipart)
///
/// /documents                           list (role-restricted rows)
/// /documents/{id}                      get, update, delete
///
/// /schedules?start=&end=               list (window overlap), create
/// /schedules/{id}                      get, update, delete
///
/// /messages                            list (participants only), send
/// /messages/{id}                       get, delete
/// /messages/{id}/read                  mark read (recipient only)
///
/// /invoices                            list, create
/// /invoices/{id}                       get, update, delete
///
/// /profile                             get, update (self)
/// /profile/password                    change password (self)
/// /profile/picture                     upload picture (multipart, self)
///
/// /activity                            query audit trail (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/clients", clients::router())
        .nest("/case-types", case_types::router())
        .nest("/cases", cases::router())
        .nest("/documents", documents::router())
        .nest("/schedules", schedules::router())
        .nest("/messages", messages::router())
        .nest("/invoices", invoices::router())
        .nest("/profile", profile::router())
        .nest("/activity", activity::router())
}
