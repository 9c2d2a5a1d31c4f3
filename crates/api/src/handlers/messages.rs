//! Handlers for the `/messages` resource.
//!
//! Any authenticated user can send; visibility is participants-only (the
//! repository filters by sender/recipient, not the handler).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::roles::ROLE_ADMIN;
use lexcase_core::sanitize::strip_markup;
use lexcase_core::types::DbId;
use lexcase_core::validation::validate_required;
use lexcase_db::models::message::{CreateMessage, Message};
use lexcase_db::repositories::MessageRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::RequireAuth;
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;

/// POST /api/v1/messages
///
/// The sender is always the authenticated caller, never part of the body.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    AppJson(input): AppJson<CreateMessage>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_required("body", &input.body).map_err(AppError::Core)?;

    let input = CreateMessage {
        case_id: input.case_id,
        recipient_id: input.recipient_id,
        body: strip_markup(&input.body),
    };

    let message = MessageRepo::create(&state.pool, &input, user.user_id).await?;

    activity::record(
        &state.pool,
        user.user_id,
        actions::MESSAGE_SEND,
        format!("Sent message to user {}", message.recipient_id),
        entities::MESSAGE,
        Some(message.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Message sent".into(),
            id: message.id,
        }),
    ))
}

/// GET /api/v1/messages
///
/// The caller's conversations (sent or received), newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<RecordsResponse<Message>>> {
    let records = MessageRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(RecordsResponse {
        message: "Messages".into(),
        records,
    }))
}

/// GET /api/v1/messages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<Message>>> {
    let record = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Message",
            id,
        }))?;

    if record.sender_id != user.user_id && record.recipient_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only participants may read a message".into(),
        )));
    }

    Ok(Json(RecordResponse {
        message: "Message".into(),
        record,
    }))
}

/// PUT /api/v1/messages/{id}/read
///
/// Recipient-only. A message already read keeps its original `read_at`.
pub async fn mark_read(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<Message>>> {
    let record = MessageRepo::mark_read(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Message",
            id,
        }))?;

    Ok(Json(RecordResponse {
        message: "Message marked as read".into(),
        record,
    }))
}

/// DELETE /api/v1/messages/{id}
///
/// The sender may delete their own message; admins may delete any.
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let record = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Message",
            id,
        }))?;

    if record.sender_id != user.user_id && user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the sender or an admin may delete a message".into(),
        )));
    }

    let deleted = MessageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Message",
            id,
        }));
    }

    activity::record(
        &state.pool,
        user.user_id,
        actions::MESSAGE_DELETE,
        format!("Deleted message {id}"),
        entities::MESSAGE,
        Some(id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Message deleted".into(),
    }))
}
