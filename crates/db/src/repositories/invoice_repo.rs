//! Repository for the `invoices` table.

use sqlx::PgPool;

use lexcase_core::types::DbId;

use crate::models::invoice::{CreateInvoice, Invoice, UpdateInvoice};

const COLUMNS: &str = "id, case_id, reference, amount_cents, currency, status, due_on, \
     issued_by, created_at, updated_at";

const QUALIFIED_COLUMNS: &str = "i.id, i.case_id, i.reference, i.amount_cents, i.currency, \
     i.status, i.due_on, i.issued_by, i.created_at, i.updated_at";

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row.
    ///
    /// `currency` defaults to `USD` and `status` to `draft` when omitted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInvoice,
        issued_by: DbId,
    ) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (case_id, reference, amount_cents, currency, status, due_on,
                                   issued_by)
             VALUES ($1, $2, $3, COALESCE($4, 'USD'), COALESCE($5, 'draft'), $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.case_id)
            .bind(&input.reference)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(&input.status)
            .bind(input.due_on)
            .bind(issued_by)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all invoices, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices ORDER BY created_at DESC");
        sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await
    }

    /// List the invoices on all cases belonging to one client, newest first.
    /// Row-level restriction for client-role callers.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM invoices i
             JOIN cases c ON c.id = i.case_id
             WHERE c.client_id = $1
             ORDER BY i.created_at DESC"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update an invoice. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET
                reference = COALESCE($2, reference),
                amount_cents = COALESCE($3, amount_cents),
                currency = COALESCE($4, currency),
                status = COALESCE($5, status),
                due_on = COALESCE($6, due_on),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(&input.reference)
            .bind(input.amount_cents)
            .bind(&input.currency)
            .bind(&input.status)
            .bind(input.due_on)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invoice by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
