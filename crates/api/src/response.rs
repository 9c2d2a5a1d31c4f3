//! Shared response envelope types for API handlers.
//!
//! Every success body is an object with a `message` key plus the
//! resource-specific payload: `id` on create, `record` on single reads and
//! updates, `records` on collection reads. Use these instead of ad-hoc
//! `serde_json::json!` literals to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

use lexcase_core::types::DbId;

/// `{ "message": ... }` — mutations with nothing else to report (deletes).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{ "message": ..., "id": ... }` — successful creates.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: DbId,
}

/// `{ "message": ..., "record": ... }` — single reads and updates.
#[derive(Debug, Serialize)]
pub struct RecordResponse<T: Serialize> {
    pub message: String,
    pub record: T,
}

/// `{ "message": ..., "records": [...] }` — collection reads. An empty
/// collection is still a 200 with `records: []`.
#[derive(Debug, Serialize)]
pub struct RecordsResponse<T: Serialize> {
    pub message: String,
    pub records: Vec<T>,
}
