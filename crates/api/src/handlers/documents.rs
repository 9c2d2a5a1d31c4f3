//! Handlers for the `/documents` resource.
//!
//! Upload extends the create template: the multipart `file` part is validated
//! (extension allow-list, 5 MiB cap) before anything touches disk, the stored
//! name is server-generated, and only then is the metadata row inserted.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::roles::ROLE_CLIENT;
use lexcase_core::sanitize::strip_markup;
use lexcase_core::types::DbId;
use lexcase_core::validation::validate_required;
use lexcase_db::models::document::{CreateDocument, Document, UpdateDocument};
use lexcase_db::repositories::{CaseRepo, DocumentRepo};

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAuth, RequirePartner, RequireStaff};
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;
use crate::uploads;

use super::own_client_id;

/// POST /api/v1/cases/{case_id}/documents  (multipart)
///
/// Parts: `file` (required), `title` (optional, defaults to the original
/// filename).
pub async fn upload(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(case_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    // The FK would catch this on insert, but by then the file is on disk.
    CaseRepo::find_by_id(&state.pool, case_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Case",
            id: case_id,
        }))?;

    let mut title: Option<String> = None;
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?
    {
        match field.name() {
            Some("title") => {
                let text = field
                    .text()
                    .await
                    .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;
                title = Some(text);
            }
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Core(CoreError::Validation(
                            "file part must carry a filename".into(),
                        ))
                    })?
                    .to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;
                file = Some((filename, content_type, data.to_vec()));
            }
            _ => {}
        }
    }

    let (original_filename, content_type, data) = file.ok_or_else(|| {
        AppError::Core(CoreError::Validation("file part is required".into()))
    })?;

    let stored = uploads::save_document(&state.config.uploads, &original_filename, &data).await?;

    let title = match title {
        Some(t) if !t.trim().is_empty() => strip_markup(&t),
        _ => original_filename.clone(),
    };

    let input = CreateDocument {
        case_id,
        title,
        original_filename,
        stored_path: stored.stored_path.clone(),
        content_type,
        size_bytes: stored.size_bytes,
        sha256: stored.sha256,
        uploaded_by: staff.user_id,
    };

    let document = match DocumentRepo::create(&state.pool, &input).await {
        Ok(document) => document,
        Err(err) => {
            // The metadata insert failed after the file write; don't leave an
            // orphan behind.
            uploads::remove_stored_file(&stored.stored_path).await;
            return Err(err.into());
        }
    };

    activity::record(
        &state.pool,
        staff.user_id,
        actions::DOCUMENT_UPLOAD,
        format!("Uploaded document {:?} to case {case_id}", document.title),
        entities::DOCUMENT,
        Some(document.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Document uploaded".into(),
            id: document.id,
        }),
    ))
}

/// GET /api/v1/documents
///
/// Staff see every document; a client-role caller sees the documents on
/// their own cases.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<RecordsResponse<Document>>> {
    let records = if user.role == ROLE_CLIENT {
        match own_client_id(&state, user.user_id).await? {
            Some(client_id) => DocumentRepo::list_by_client(&state.pool, client_id).await?,
            None => Vec::new(),
        }
    } else {
        DocumentRepo::list(&state.pool).await?
    };

    Ok(Json(RecordsResponse {
        message: "Documents".into(),
        records,
    }))
}

/// GET /api/v1/cases/{case_id}/documents
pub async fn list_by_case(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(case_id): Path<DbId>,
) -> AppResult<Json<RecordsResponse<Document>>> {
    if user.role == ROLE_CLIENT {
        let case = CaseRepo::find_by_id(&state.pool, case_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Case",
                id: case_id,
            }))?;
        let owned = own_client_id(&state, user.user_id).await? == Some(case.client_id);
        if !owned {
            return Err(AppError::Core(CoreError::Forbidden(
                "Clients may only access their own cases".into(),
            )));
        }
    }

    let records = DocumentRepo::list_by_case(&state.pool, case_id).await?;
    Ok(Json(RecordsResponse {
        message: "Documents".into(),
        records,
    }))
}

/// GET /api/v1/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<Document>>> {
    let record = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    Ok(Json(RecordResponse {
        message: "Document".into(),
        record,
    }))
}

/// PUT /api/v1/documents/{id}
///
/// Metadata only: the stored file is immutable.
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateDocument>,
) -> AppResult<Json<RecordResponse<Document>>> {
    if let Some(title) = &input.title {
        validate_required("title", title).map_err(AppError::Core)?;
    }

    let input = UpdateDocument {
        title: input.title.as_deref().map(strip_markup),
    };

    let record = DocumentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    activity::record(
        &state.pool,
        staff.user_id,
        actions::DOCUMENT_UPDATE,
        format!("Updated document {:?}", record.title),
        entities::DOCUMENT,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Document updated".into(),
        record,
    }))
}

/// DELETE /api/v1/documents/{id}
///
/// Removes the metadata row first, then unlinks the stored file best-effort.
pub async fn delete(
    State(state): State<AppState>,
    RequirePartner(partner): RequirePartner,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let removed = DocumentRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    uploads::remove_stored_file(&removed.stored_path).await;

    activity::record(
        &state.pool,
        partner.user_id,
        actions::DOCUMENT_DELETE,
        format!("Deleted document {:?}", removed.title),
        entities::DOCUMENT,
        Some(removed.id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Document deleted".into(),
    }))
}
