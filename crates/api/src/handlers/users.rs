//! Handlers for the `/users` resource. All operations are admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::roles::ALL_ROLES;
use lexcase_core::types::DbId;
use lexcase_core::validation::{validate_email, validate_required};
use lexcase_db::models::user::{CreateUser, UpdateUser, User};
use lexcase_db::repositories::UserRepo;

use crate::activity;
use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;

fn validate_role(role: &str) -> Result<(), CoreError> {
    if !ALL_ROLES.contains(&role) {
        return Err(CoreError::Validation(format!(
            "role must be one of: {}",
            ALL_ROLES.join(", ")
        )));
    }
    Ok(())
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_required("username", &input.username).map_err(AppError::Core)?;
    validate_required("full_name", &input.full_name).map_err(AppError::Core)?;
    validate_required("email", &input.email).map_err(AppError::Core)?;
    validate_email(&input.email).map_err(AppError::Core)?;
    validate_role(&input.role).map_err(AppError::Core)?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        username: input.username.trim().to_string(),
        email: input.email.trim().to_string(),
        password: String::new(), // consumed above; never forwarded
        full_name: input.full_name.trim().to_string(),
        role: input.role,
    };

    let user = UserRepo::create(&state.pool, &input, &password_hash).await?;

    activity::record(
        &state.pool,
        admin.user_id,
        actions::USER_CREATE,
        format!("Created user {:?} with role {}", user.username, user.role),
        entities::USER,
        Some(user.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "User created".into(),
            id: user.id,
        }),
    ))
}

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<RecordsResponse<User>>> {
    let records = UserRepo::list(&state.pool).await?;
    Ok(Json(RecordsResponse {
        message: "Users".into(),
        records,
    }))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<User>>> {
    let record = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(RecordResponse {
        message: "User".into(),
        record,
    }))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<Json<RecordResponse<User>>> {
    if let Some(email) = &input.email {
        validate_email(email).map_err(AppError::Core)?;
    }
    if let Some(role) = &input.role {
        validate_role(role).map_err(AppError::Core)?;
    }

    let record = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    activity::record(
        &state.pool,
        admin.user_id,
        actions::USER_UPDATE,
        format!("Updated user {:?}", record.username),
        entities::USER,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "User updated".into(),
        record,
    }))
}

/// DELETE /api/v1/users/{id}
///
/// A user referenced by documents, schedules, messages, or invoices is
/// blocked by the FK and surfaces as a storage error; deactivate instead.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if id == admin.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot delete your own account".into(),
        )));
    }

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    activity::record(
        &state.pool,
        admin.user_id,
        actions::USER_DELETE,
        format!("Deleted user {id}"),
        entities::USER,
        Some(id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "User deleted".into(),
    }))
}
