//! Case type lookup model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexcase_core::types::{DbId, Timestamp};

/// A case type row from the `case_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CaseType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new case type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCaseType {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing case type. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCaseType {
    pub name: Option<String>,
    pub description: Option<String>,
}
