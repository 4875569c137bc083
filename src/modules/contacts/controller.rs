use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::balance::BalanceService;
use crate::modules::sessions::SessionService;
use crate::state::AppState;
use parentportal_core::AppError;

use super::model::{SearchStudentQuery, SearchStudentResponse, StudentWithSessions};
use super::service::ContactService;

/// Look up a parent by phone with their balance and students' sessions
#[utoipa::path(
    get,
    path = "/api/search_student",
    params(SearchStudentQuery),
    responses(
        (status = 200, description = "Parent found", body = SearchStudentResponse),
        (status = 400, description = "Missing contact_num", body = ErrorResponse),
        (status = 404, description = "Parent not found, or the parent has no students", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
#[instrument(skip(state))]
pub async fn search_student(
    State(state): State<AppState>,
    Query(query): Query<SearchStudentQuery>,
) -> Result<Json<SearchStudentResponse>, AppError> {
    let contact_num = query
        .contact_num
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Missing contact_num")))?;

    let lookup = ContactService::find_inquiry_by_contact_phone(state.store.as_ref(), &contact_num)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Parent not found")))?;

    if lookup.students.is_empty() {
        return Err(AppError::not_found(anyhow::anyhow!(
            "No students found for this parent"
        )));
    }

    let inquiry_id = lookup.inquiry.inquiry_id;
    let parent = BalanceService::get_hours_balance(state.balances.as_ref(), inquiry_id).await;

    let mut students = Vec::with_capacity(lookup.students.len());
    for student in lookup.students {
        let sessions = SessionService::get_sessions(state.store.as_ref(), student.id).await?;
        students.push(StudentWithSessions { student, sessions });
    }

    Ok(Json(SearchStudentResponse {
        success: true,
        inquiry_id,
        parent,
        students,
    }))
}
