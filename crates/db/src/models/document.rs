//! Document metadata model and DTOs.
//!
//! The file bytes live under the upload directory; rows here only describe
//! them. There is no `updated_at`: re-uploading is a new document.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexcase_core::types::{DbId, Timestamp};

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub case_id: DbId,
    pub title: String,
    pub original_filename: String,
    pub stored_path: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    pub sha256: String,
    pub uploaded_by: DbId,
    pub created_at: Timestamp,
}

/// DTO for inserting a document metadata row. Built by the upload handler
/// after the file has been validated and written.
#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub case_id: DbId,
    pub title: String,
    pub original_filename: String,
    pub stored_path: String,
    pub content_type: Option<String>,
    pub size_bytes: i64,
    pub sha256: String,
    pub uploaded_by: DbId,
}

/// DTO for updating document metadata (title only; the file is immutable).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocument {
    pub title: Option<String>,
}
