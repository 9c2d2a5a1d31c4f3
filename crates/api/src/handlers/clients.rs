//! Handlers for the `/clients` resource.
//!
//! Staff manage client records. A client-role caller listing the collection
//! sees only the record linked to their own login.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::roles::ROLE_CLIENT;
use lexcase_core::sanitize::strip_markup;
use lexcase_core::types::DbId;
use lexcase_core::validation::{validate_email, validate_required};
use lexcase_db::models::client::{Client, CreateClient, UpdateClient};
use lexcase_db::repositories::ClientRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAuth, RequirePartner, RequireStaff};
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    AppJson(input): AppJson<CreateClient>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_required("name", &input.name).map_err(AppError::Core)?;
    validate_required("email", &input.email).map_err(AppError::Core)?;
    validate_email(&input.email).map_err(AppError::Core)?;

    let input = CreateClient {
        name: strip_markup(&input.name),
        email: input.email.trim().to_string(),
        phone: input.phone.map(|p| p.trim().to_string()),
        address: input.address.as_deref().map(strip_markup),
        user_id: input.user_id,
    };

    let client = ClientRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        staff.user_id,
        actions::CLIENT_CREATE,
        format!("Created client {:?}", client.name),
        entities::CLIENT,
        Some(client.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Client created".into(),
            id: client.id,
        }),
    ))
}

/// GET /api/v1/clients
///
/// Staff see every client; a client-role caller sees only their own record
/// (an unlinked login sees an empty list).
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<RecordsResponse<Client>>> {
    let records = if user.role == ROLE_CLIENT {
        ClientRepo::find_by_user_id(&state.pool, user.user_id)
            .await?
            .into_iter()
            .collect()
    } else {
        ClientRepo::list(&state.pool).await?
    };

    Ok(Json(RecordsResponse {
        message: "Clients".into(),
        records,
    }))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<Client>>> {
    let record = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    Ok(Json(RecordResponse {
        message: "Client".into(),
        record,
    }))
}

/// PUT /api/v1/clients/{id}
///
/// Email format is validated here exactly like the profile path.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateClient>,
) -> AppResult<Json<RecordResponse<Client>>> {
    if let Some(name) = &input.name {
        validate_required("name", name).map_err(AppError::Core)?;
    }
    if let Some(email) = &input.email {
        validate_email(email).map_err(AppError::Core)?;
    }

    let input = UpdateClient {
        name: input.name.as_deref().map(strip_markup),
        email: input.email.map(|e| e.trim().to_string()),
        phone: input.phone.map(|p| p.trim().to_string()),
        address: input.address.as_deref().map(strip_markup),
        user_id: input.user_id,
    };

    let record = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    activity::record(
        &state.pool,
        staff.user_id,
        actions::CLIENT_UPDATE,
        format!("Updated client {:?}", record.name),
        entities::CLIENT,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Client updated".into(),
        record,
    }))
}

/// DELETE /api/v1/clients/{id}
///
/// A client with cases on file is blocked by the FK and surfaces as a
/// storage error.
pub async fn delete(
    State(state): State<AppState>,
    RequirePartner(partner): RequirePartner,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }));
    }

    activity::record(
        &state.pool,
        partner.user_id,
        actions::CLIENT_DELETE,
        format!("Deleted client {id}"),
        entities::CLIENT,
        Some(id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Client deleted".into(),
    }))
}
