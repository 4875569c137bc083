use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use parentportal_core::AppError;
use parentportal_models::StudentId;

use super::model::{ScheduleQuery, ScheduleResponse, SessionRecord, StudentSessionsResponse};
use super::service::SessionService;

/// Current-month sessions of one student
#[utoipa::path(
    get,
    path = "/api/get_schedule/{student_id}",
    params(("student_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Sessions, recent first", body = Vec<SessionRecord>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<Vec<SessionRecord>>, AppError> {
    let sessions = SessionService::get_sessions(state.store.as_ref(), student_id).await?;
    Ok(Json(sessions))
}

/// Schedule data for a student given as a query parameter
#[utoipa::path(
    get,
    path = "/api/schedule",
    params(ScheduleQuery),
    responses(
        (status = 200, description = "Sessions for the student", body = ScheduleResponse),
        (status = 400, description = "Missing or non-numeric student_id", body = ErrorResponse),
        (status = 500, description = "Failed to fetch sessions", body = ErrorResponse)
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_schedule_data(
    State(state): State<AppState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let raw_id = query
        .student_id
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Missing student_id")))?;
    let student_id: StudentId = raw_id.parse().map_err(|_| {
        AppError::bad_request(anyhow::anyhow!("student_id must be an integer"))
    })?;

    let sessions = SessionService::get_sessions(state.store.as_ref(), student_id)
        .await
        .map_err(|e| AppError::internal_error(format!("Failed to fetch sessions: {}", e)))?;

    Ok(Json(ScheduleResponse {
        upcoming_sessions: sessions.clone(),
        session_timeline: sessions.clone(),
        sessions,
        student_id,
    }))
}

/// Sessions of one student in the three views the schedule page renders
#[utoipa::path(
    get,
    path = "/api/student-sessions/{student_id}",
    params(("student_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Sessions for the student", body = StudentSessionsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_student_sessions(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<StudentSessionsResponse>, AppError> {
    let sessions = SessionService::get_sessions(state.store.as_ref(), student_id).await?;

    Ok(Json(StudentSessionsResponse {
        upcoming_sessions: sessions.clone(),
        session_timeline: sessions.clone(),
        all_sessions: sessions,
    }))
}
