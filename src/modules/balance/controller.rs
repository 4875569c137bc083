use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::state::AppState;
use parentportal_models::{BalanceReport, InquiryId};

use super::service::BalanceService;

/// Remaining tutoring hours of an inquiry
///
/// Always succeeds; an empty report with zero hours is returned when the
/// balance cannot be computed.
#[utoipa::path(
    get,
    path = "/api/get_balance/{inquiry_id}",
    params(("inquiry_id" = i32, Path, description = "Inquiry ID")),
    responses(
        (status = 200, description = "Balance report", body = BalanceReport)
    ),
    tag = "Balance"
)]
#[instrument(skip(state))]
pub async fn get_balance(
    State(state): State<AppState>,
    Path(inquiry_id): Path<InquiryId>,
) -> Json<BalanceReport> {
    Json(BalanceService::get_hours_balance(state.balances.as_ref(), inquiry_id).await)
}
