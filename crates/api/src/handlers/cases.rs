//! Handlers for the `/cases` resource.
//!
//! Staff operate on all cases. Client-role callers are restricted to the
//! cases of their own client record. Staff-level per-case assignment is not
//! enforced: any lawyer can read any case.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::roles::ROLE_CLIENT;
use lexcase_core::sanitize::strip_markup;
use lexcase_core::types::DbId;
use lexcase_core::validation::{validate_case_status, validate_required};
use lexcase_db::models::case::{Case, CreateCase, UpdateCase};
use lexcase_db::repositories::CaseRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAuth, RequirePartner, RequireStaff};
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;

use super::own_client_id;

/// POST /api/v1/cases
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    AppJson(input): AppJson<CreateCase>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_required("reference", &input.reference).map_err(AppError::Core)?;
    validate_required("title", &input.title).map_err(AppError::Core)?;
    if let Some(status) = &input.status {
        validate_case_status(status).map_err(AppError::Core)?;
    }

    let input = CreateCase {
        reference: input.reference.trim().to_string(),
        title: strip_markup(&input.title),
        description: input.description.as_deref().map(strip_markup),
        client_id: input.client_id,
        case_type_id: input.case_type_id,
        lawyer_id: input.lawyer_id,
        status: input.status,
        opened_on: input.opened_on,
    };

    let case = CaseRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        staff.user_id,
        actions::CASE_CREATE,
        format!("Opened case {:?}", case.reference),
        entities::CASE,
        Some(case.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Case created".into(),
            id: case.id,
        }),
    ))
}

/// GET /api/v1/cases
///
/// Staff see every case; a client-role caller sees only their own.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<RecordsResponse<Case>>> {
    let records = if user.role == ROLE_CLIENT {
        match own_client_id(&state, user.user_id).await? {
            Some(client_id) => CaseRepo::list_by_client(&state.pool, client_id).await?,
            None => Vec::new(),
        }
    } else {
        CaseRepo::list(&state.pool).await?
    };

    Ok(Json(RecordsResponse {
        message: "Cases".into(),
        records,
    }))
}

/// GET /api/v1/cases/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<Case>>> {
    let record = CaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Case", id }))?;

    if user.role == ROLE_CLIENT {
        let owned = own_client_id(&state, user.user_id).await? == Some(record.client_id);
        if !owned {
            return Err(AppError::Core(CoreError::Forbidden(
                "Clients may only access their own cases".into(),
            )));
        }
    }

    Ok(Json(RecordResponse {
        message: "Case".into(),
        record,
    }))
}

/// PUT /api/v1/cases/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateCase>,
) -> AppResult<Json<RecordResponse<Case>>> {
    if let Some(reference) = &input.reference {
        validate_required("reference", reference).map_err(AppError::Core)?;
    }
    if let Some(title) = &input.title {
        validate_required("title", title).map_err(AppError::Core)?;
    }
    if let Some(status) = &input.status {
        validate_case_status(status).map_err(AppError::Core)?;
    }

    let input = UpdateCase {
        reference: input.reference.map(|r| r.trim().to_string()),
        title: input.title.as_deref().map(strip_markup),
        description: input.description.as_deref().map(strip_markup),
        client_id: input.client_id,
        case_type_id: input.case_type_id,
        lawyer_id: input.lawyer_id,
        status: input.status,
        opened_on: input.opened_on,
    };

    let record = CaseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Case", id }))?;

    activity::record(
        &state.pool,
        staff.user_id,
        actions::CASE_UPDATE,
        format!("Updated case {:?}", record.reference),
        entities::CASE,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Case updated".into(),
        record,
    }))
}

/// DELETE /api/v1/cases/{id}
///
/// A case with documents, schedules, messages, or invoices attached is
/// blocked by the FK and surfaces as a storage error.
pub async fn delete(
    State(state): State<AppState>,
    RequirePartner(partner): RequirePartner,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = CaseRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Case", id }));
    }

    activity::record(
        &state.pool,
        partner.user_id,
        actions::CASE_DELETE,
        format!("Deleted case {id}"),
        entities::CASE,
        Some(id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Case deleted".into(),
    }))
}
