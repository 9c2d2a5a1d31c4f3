//! Handlers for the `/profile` resource -- the caller's own account.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::validation::validate_email;
use lexcase_db::models::user::User;
use lexcase_db::repositories::UserRepo;

use crate::activity;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::RecordResponse;
use crate::state::AppState;
use crate::uploads;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /profile`.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// Request body for `PUT /profile/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Response for `POST /profile/picture`.
#[derive(Debug, Serialize)]
pub struct PictureResponse {
    pub message: String,
    pub path: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/profile
pub async fn get(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<RecordResponse<User>>> {
    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    Ok(Json(RecordResponse {
        message: "Profile".into(),
        record,
    }))
}

/// PUT /api/v1/profile
///
/// Email format is validated; role and activation state are admin-only and
/// not editable here.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    AppJson(input): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<RecordResponse<User>>> {
    if let Some(email) = &input.email {
        validate_email(email).map_err(AppError::Core)?;
    }

    let record = UserRepo::update_profile(
        &state.pool,
        user.user_id,
        input.full_name.as_deref().map(str::trim),
        input.email.as_deref().map(str::trim),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "User",
        id: user.user_id,
    }))?;

    activity::record(
        &state.pool,
        user.user_id,
        actions::PROFILE_UPDATE,
        format!("User {:?} updated their profile", record.username),
        entities::USER,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Profile updated".into(),
        record,
    }))
}

/// PUT /api/v1/profile/password
pub async fn change_password(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    AppJson(input): AppJson<ChangePasswordRequest>,
) -> AppResult<Json<RecordResponse<User>>> {
    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }))?;

    let current_valid = verify_password(&input.current_password, &record.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Validation(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;
    UserRepo::set_password_hash(&state.pool, user.user_id, &new_hash).await?;

    activity::record(
        &state.pool,
        user.user_id,
        actions::PASSWORD_CHANGE,
        format!("User {:?} changed their password", record.username),
        entities::USER,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Password changed".into(),
        record,
    }))
}

/// POST /api/v1/profile/picture  (multipart)
///
/// Replaces any previously stored picture for the caller: exactly one file
/// per owner exists afterwards.
pub async fn upload_picture(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    mut multipart: Multipart,
) -> AppResult<Json<PictureResponse>> {
    let (filename, _content_type, data) = uploads::read_file_field(&mut multipart, "file")
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Validation("file part is required".into())))?;

    let path =
        uploads::save_profile_picture(&state.config.uploads, user.user_id, &filename, &data)
            .await?;

    let updated = UserRepo::set_profile_picture_path(&state.pool, user.user_id, &path).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.user_id,
        }));
    }

    activity::record(
        &state.pool,
        user.user_id,
        actions::PROFILE_PICTURE_UPLOAD,
        format!("User {} uploaded a profile picture", user.user_id),
        entities::USER,
        Some(user.user_id),
    )
    .await;

    Ok(Json(PictureResponse {
        message: "Profile picture uploaded".into(),
        path,
    }))
}
