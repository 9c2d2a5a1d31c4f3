//! Handlers for the `/case-types` resource.
//!
//! Case types are an admin-managed lookup; any authenticated user may list
//! them (they populate the case form).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::sanitize::strip_markup;
use lexcase_core::types::DbId;
use lexcase_core::validation::validate_required;
use lexcase_db::models::case_type::{CaseType, CreateCaseType, UpdateCaseType};
use lexcase_db::repositories::CaseTypeRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;

/// POST /api/v1/case-types
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<CreateCaseType>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_required("name", &input.name).map_err(AppError::Core)?;

    let input = CreateCaseType {
        name: input.name.trim().to_string(),
        description: input.description.as_deref().map(strip_markup),
    };

    let case_type = CaseTypeRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        admin.user_id,
        actions::CASE_TYPE_CREATE,
        format!("Created case type {:?}", case_type.name),
        entities::CASE_TYPE,
        Some(case_type.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Case type created".into(),
            id: case_type.id,
        }),
    ))
}

/// GET /api/v1/case-types
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<RecordsResponse<CaseType>>> {
    let records = CaseTypeRepo::list(&state.pool).await?;
    Ok(Json(RecordsResponse {
        message: "Case types".into(),
        records,
    }))
}

/// GET /api/v1/case-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<CaseType>>> {
    let record = CaseTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CaseType",
            id,
        }))?;

    Ok(Json(RecordResponse {
        message: "Case type".into(),
        record,
    }))
}

/// PUT /api/v1/case-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateCaseType>,
) -> AppResult<Json<RecordResponse<CaseType>>> {
    if let Some(name) = &input.name {
        validate_required("name", name).map_err(AppError::Core)?;
    }

    let input = UpdateCaseType {
        name: input.name.map(|n| n.trim().to_string()),
        description: input.description.as_deref().map(strip_markup),
    };

    let record = CaseTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CaseType",
            id,
        }))?;

    activity::record(
        &state.pool,
        admin.user_id,
        actions::CASE_TYPE_UPDATE,
        format!("Updated case type {:?}", record.name),
        entities::CASE_TYPE,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Case type updated".into(),
        record,
    }))
}

/// DELETE /api/v1/case-types/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = CaseTypeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CaseType",
            id,
        }));
    }

    activity::record(
        &state.pool,
        admin.user_id,
        actions::CASE_TYPE_DELETE,
        format!("Deleted case type {id}"),
        entities::CASE_TYPE,
        Some(id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Case type deleted".into(),
    }))
}
