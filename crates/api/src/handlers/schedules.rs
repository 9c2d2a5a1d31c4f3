//! Handlers for the `/schedules` resource.
//!
//! Listing accepts an optional `start`/`end` window and matches entries whose
//! interval overlaps it. An empty window is a 200 with `records: []`, never a
//! 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Deserialize;

use lexcase_core::audit::{actions, entities};
use lexcase_core::error::CoreError;
use lexcase_core::roles::ROLE_CLIENT;
use lexcase_core::sanitize::strip_markup;
use lexcase_core::types::{DbId, Timestamp};
use lexcase_core::validation::{validate_required, validate_time_range};
use lexcase_db::models::schedule::{CreateSchedule, Schedule, ScheduleRange, UpdateSchedule};
use lexcase_db::repositories::ScheduleRepo;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::response::{CreatedResponse, MessageResponse, RecordResponse, RecordsResponse};
use crate::state::AppState;

use super::own_client_id;

/// Raw `start`/`end` query parameters for the schedule listing. Each bound
/// accepts either a full RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleWindowParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Parse one window bound. A date-only `end` covers the whole day.
fn parse_bound(raw: &str, end_of_day: bool) -> Result<Timestamp, CoreError> {
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts);
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        let time = if end_of_day {
            NaiveTime::from_hms_opt(23, 59, 59).expect("constant time is valid")
        } else {
            NaiveTime::MIN
        };
        return Ok(Utc.from_utc_datetime(&date.and_time(time)));
    }
    Err(CoreError::Validation(format!(
        "{raw:?} is not a valid date or timestamp"
    )))
}

fn parse_window(params: &ScheduleWindowParams) -> Result<ScheduleRange, CoreError> {
    let start = params
        .start
        .as_deref()
        .map(|s| parse_bound(s, false))
        .transpose()?;
    let end = params
        .end
        .as_deref()
        .map(|s| parse_bound(s, true))
        .transpose()?;
    Ok(ScheduleRange { start, end })
}

/// POST /api/v1/schedules
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    AppJson(input): AppJson<CreateSchedule>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    validate_required("title", &input.title).map_err(AppError::Core)?;
    validate_time_range(input.starts_at, input.ends_at).map_err(AppError::Core)?;

    let input = CreateSchedule {
        case_id: input.case_id,
        title: strip_markup(&input.title),
        description: input.description.as_deref().map(strip_markup),
        location: input.location.as_deref().map(strip_markup),
        starts_at: input.starts_at,
        ends_at: input.ends_at,
    };

    let schedule = ScheduleRepo::create(&state.pool, &input, staff.user_id).await?;

    activity::record(
        &state.pool,
        staff.user_id,
        actions::SCHEDULE_CREATE,
        format!("Scheduled {:?}", schedule.title),
        entities::SCHEDULE,
        Some(schedule.id),
    )
    .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Schedule entry created".into(),
            id: schedule.id,
        }),
    ))
}

/// GET /api/v1/schedules?start=...&end=...
///
/// Staff see every entry in the window; a client-role caller sees only
/// entries on their own cases.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ScheduleWindowParams>,
) -> AppResult<Json<RecordsResponse<Schedule>>> {
    let range = parse_window(&params).map_err(AppError::Core)?;

    let records = if user.role == ROLE_CLIENT {
        match own_client_id(&state, user.user_id).await? {
            Some(client_id) => ScheduleRepo::list_for_client(&state.pool, client_id, &range).await?,
            None => Vec::new(),
        }
    } else {
        ScheduleRepo::list(&state.pool, &range).await?
    };

    Ok(Json(RecordsResponse {
        message: "Schedules".into(),
        records,
    }))
}

/// GET /api/v1/schedules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<RecordResponse<Schedule>>> {
    let record = ScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))?;

    Ok(Json(RecordResponse {
        message: "Schedule entry".into(),
        record,
    }))
}

/// PUT /api/v1/schedules/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateSchedule>,
) -> AppResult<Json<RecordResponse<Schedule>>> {
    if let Some(title) = &input.title {
        validate_required("title", title).map_err(AppError::Core)?;
    }
    if let (Some(starts_at), Some(ends_at)) = (input.starts_at, input.ends_at) {
        validate_time_range(starts_at, ends_at).map_err(AppError::Core)?;
    }

    let input = UpdateSchedule {
        case_id: input.case_id,
        title: input.title.as_deref().map(strip_markup),
        description: input.description.as_deref().map(strip_markup),
        location: input.location.as_deref().map(strip_markup),
        starts_at: input.starts_at,
        ends_at: input.ends_at,
    };

    let record = ScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }))?;

    activity::record(
        &state.pool,
        staff.user_id,
        actions::SCHEDULE_UPDATE,
        format!("Updated schedule {:?}", record.title),
        entities::SCHEDULE,
        Some(record.id),
    )
    .await;

    Ok(Json(RecordResponse {
        message: "Schedule entry updated".into(),
        record,
    }))
}

/// DELETE /api/v1/schedules/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ScheduleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Schedule",
            id,
        }));
    }

    activity::record(
        &state.pool,
        staff.user_id,
        actions::SCHEDULE_DELETE,
        format!("Deleted schedule {id}"),
        entities::SCHEDULE,
        Some(id),
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Schedule entry deleted".into(),
    }))
}
