//! Case entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexcase_core::types::{DbId, Timestamp};

/// A case row from the `cases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Case {
    pub id: DbId,
    /// Human-facing docket number, unique across the firm.
    pub reference: String,
    pub title: String,
    pub description: Option<String>,
    pub client_id: DbId,
    pub case_type_id: DbId,
    pub lawyer_id: Option<DbId>,
    pub status: String,
    pub opened_on: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new case.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCase {
    pub reference: String,
    pub title: String,
    pub description: Option<String>,
    pub client_id: DbId,
    pub case_type_id: DbId,
    pub lawyer_id: Option<DbId>,
    /// Defaults to `open` if omitted.
    pub status: Option<String>,
    /// Defaults to today if omitted.
    pub opened_on: Option<NaiveDate>,
}

/// DTO for updating an existing case. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCase {
    pub reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<DbId>,
    pub case_type_id: Option<DbId>,
    pub lawyer_id: Option<DbId>,
    pub status: Option<String>,
    pub opened_on: Option<NaiveDate>,
}
