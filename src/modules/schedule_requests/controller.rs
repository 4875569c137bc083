use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::ParentSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::email::RequestSender;
use crate::validator::ValidatedJson;
use parentportal_core::AppError;

use super::model::{RequestSource, ScheduleChangeRequest, ScheduleChangeResponse};
use super::service::ScheduleRequestService;

/// Submit a schedule change request without logging in
#[utoipa::path(
    post,
    path = "/api/schedule-change-request",
    request_body = ScheduleChangeRequest,
    responses(
        (status = 200, description = "Request acknowledged", body = ScheduleChangeResponse),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Schedule Requests"
)]
#[instrument(skip(state, dto))]
pub async fn submit_schedule_change_request(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ScheduleChangeRequest>,
) -> Result<Json<ScheduleChangeResponse>, AppError> {
    let response = ScheduleRequestService::submit(
        &state.email_config,
        dto,
        RequestSender::default(),
        RequestSource::Api,
    )
    .await?;
    Ok(Json(response))
}

/// Submit a schedule change request from the portal
#[utoipa::path(
    post,
    path = "/api/portal/schedule-change-request",
    request_body = ScheduleChangeRequest,
    responses(
        (status = 200, description = "Request acknowledged", body = ScheduleChangeResponse),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portal"
)]
#[instrument(skip(state, session, dto), fields(inquiry_id = %session.inquiry_id()))]
pub async fn submit_portal_schedule_change_request(
    State(state): State<AppState>,
    session: ParentSession,
    ValidatedJson(dto): ValidatedJson<ScheduleChangeRequest>,
) -> Result<Json<ScheduleChangeResponse>, AppError> {
    let sender = RequestSender {
        username: Some(session.username().to_string()),
        contact_number: Some(session.0.contact_number.clone()),
    };
    let response =
        ScheduleRequestService::submit(&state.email_config, dto, sender, RequestSource::Portal)
            .await?;
    Ok(Json(response))
}
