//! Repository for the `documents` table.

use sqlx::PgPool;

use lexcase_core::types::DbId;

use crate::models::document::{CreateDocument, Document, UpdateDocument};

const COLUMNS: &str = "id, case_id, title, original_filename, stored_path, content_type, \
     size_bytes, sha256, uploaded_by, created_at";

/// Qualified column list for queries joining through `cases`.
const QUALIFIED_COLUMNS: &str = "d.id, d.case_id, d.title, d.original_filename, d.stored_path, \
     d.content_type, d.size_bytes, d.sha256, d.uploaded_by, d.created_at";

/// Provides CRUD operations for document metadata.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document metadata row, returning it.
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (case_id, title, original_filename, stored_path,
                                    content_type, size_bytes, sha256, uploaded_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.case_id)
            .bind(&input.title)
            .bind(&input.original_filename)
            .bind(&input.stored_path)
            .bind(&input.content_type)
            .bind(input.size_bytes)
            .bind(&input.sha256)
            .bind(input.uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// Find a document by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all documents, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents ORDER BY created_at DESC");
        sqlx::query_as::<_, Document>(&query).fetch_all(pool).await
    }

    /// List the documents attached to one case, newest first.
    pub async fn list_by_case(pool: &PgPool, case_id: DbId) -> Result<Vec<Document>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM documents WHERE case_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Document>(&query)
            .bind(case_id)
            .fetch_all(pool)
            .await
    }

    /// List the documents on all cases belonging to one client, newest first.
    /// Row-level restriction for client-role callers.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM documents d
             JOIN cases c ON c.id = d.case_id
             WHERE c.client_id = $1
             ORDER BY d.created_at DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update document metadata (title only; the stored file is immutable).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDocument,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET title = COALESCE($2, title)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a document row by ID. Returns the removed row so the caller can
    /// also unlink the stored file, or `None` if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("DELETE FROM documents WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
