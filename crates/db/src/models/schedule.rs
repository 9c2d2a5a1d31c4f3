//! Schedule entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexcase_core::types::{DbId, Timestamp};

/// A schedule row from the `schedules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Schedule {
    pub id: DbId,
    pub case_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new schedule entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchedule {
    pub case_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
}

/// DTO for updating an existing schedule entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSchedule {
    pub case_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
}

/// Date-range filter for schedule listings. Either bound may be omitted; a
/// row matches when its interval overlaps the requested window.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRange {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}
