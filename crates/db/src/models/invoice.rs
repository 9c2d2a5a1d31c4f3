//! Invoice entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexcase_core::types::{DbId, Timestamp};

/// An invoice row from the `invoices` table. Amounts are integer minor units.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub case_id: DbId,
    pub reference: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub due_on: Option<NaiveDate>,
    pub issued_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub case_id: DbId,
    pub reference: String,
    pub amount_cents: i64,
    /// Defaults to `USD` if omitted.
    pub currency: Option<String>,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
    pub due_on: Option<NaiveDate>,
}

/// DTO for updating an existing invoice. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoice {
    pub reference: Option<String>,
    pub amount_cents: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub due_on: Option<NaiveDate>,
}
