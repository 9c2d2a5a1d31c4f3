//! Handlers for the `/invoices` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::roles::ROLE_CLIENT;
use lexcase_core::types::DbId;
use lexcase_core::validation::{
    validate_amount_cents, validate_invoice_status, validate_required,
};
use lexcase_db::models::invoice::{CreateInvoice, Invoice, UpdateInvoice};
use lexcase_db::repositories::InvoiceRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequirePartner, RequireStaff};
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;

use super::own_client_id;

/// POST /api/v1/invoices
pub async fn create(
    State(state): State<AppState>,
    RequirePartner(partner): RequirePartner,
    AppJson(input): AppJson<CreateInvoice>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_required("reference", &input.reference).map_err(AppError::Core)?;
    validate_amount_cents(input.amount_cents).map_err(AppError::Core)?;
    if let Some(status) = &input.status {
        validate_invoice_status(status).map_err(AppError::Core)?;
    }

    let input = CreateInvoice {
        case_id: input.case_id,
        reference: input.reference.trim().to_string(),
        amount_cents: input.amount_cents,
        currency: input.currency,
        status: input.status,
        due_on: input.due_on,
    };

    let invoice = InvoiceRepo::create(&state.pool, &input, partner.user_id).await?;

    activity::record(
        &state.pool,
        partner.user_id,
        actions::INVOICE_CREATE,
        format!("Issued invoice {:?}", invoice.reference),
        entities::INVOICE,
        Some(invoice.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Invoice created".into(),
            id: invoice.id,
        }),
    ))
}

/// GET /api/v1/invoices
///
/// Staff see every invoice; a client-role caller sees the invoices on their
/// own cases.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<RecordsResponse<Invoice>>> {
    let records = if user.role == ROLE_CLIENT {
        match own_client_id(&state, user.user_id).await? {
            Some(client_id) => InvoiceRepo::list_by_client(&state.pool, client_id).await?,
            None => Vec::new(),
        }
    } else {
        InvoiceRepo::list(&state.pool).await?
    };

    Ok(Json(RecordsResponse {
        message: "Invoices".into(),
        records,
    }))
}

/// GET /api/v1/invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<Invoice>>> {
    let record = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;

    Ok(Json(RecordResponse {
        message: "Invoice".into(),
        record,
    }))
}

/// PUT /api/v1/invoices/{id}
pub async fn update(
    State(state): State<AppState>,
    RequirePartner(partner): RequirePartner,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateInvoice>,
) -> AppResult<Json<RecordResponse<Invoice>>> {
    if let Some(reference) = &input.reference {
        validate_required("reference", reference).map_err(AppError::Core)?;
    }
    if let Some(amount_cents) = input.amount_cents {
        validate_amount_cents(amount_cents).map_err(AppError::Core)?;
    }
    if let Some(status) = &input.status {
        validate_invoice_status(status).map_err(AppError::Core)?;
    }

    let record = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;

    activity::record(
        &state.pool,
        partner.user_id,
        actions::INVOICE_UPDATE,
        format!("Updated invoice {:?}", record.reference),
        entities::INVOICE,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Invoice updated".into(),
        record,
    }))
}

/// DELETE /api/v1/invoices/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = InvoiceRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }));
    }

    activity::record(
        &state.pool,
        admin.user_id,
        actions::INVOICE_DELETE,
        format!("Deleted invoice {id}"),
        entities::INVOICE,
        Some(id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Invoice deleted".into(),
    }))
}
