use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::ParentSession;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;

use super::model::{BillingResponse, DashboardResponse, ScheduleViewResponse};
use super::service::PortalService;

/// Dashboard: this month's sessions for every student plus the balance
#[utoipa::path(
    get,
    path = "/api/portal/dashboard",
    responses(
        (status = 200, description = "Dashboard data; `warning` is set when loading failed", body = DashboardResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portal"
)]
#[instrument(skip(state, session))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: ParentSession,
) -> Json<DashboardResponse> {
    Json(PortalService::dashboard(state.store.as_ref(), state.balances.as_ref(), &session).await)
}

/// Schedule tab: this month's sessions for every student
#[utoipa::path(
    get,
    path = "/api/portal/schedule",
    responses(
        (status = 200, description = "Schedule data; `warning` is set when loading failed", body = ScheduleViewResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portal"
)]
#[instrument(skip(state, session))]
pub async fn get_schedule_view(
    State(state): State<AppState>,
    session: ParentSession,
) -> Json<ScheduleViewResponse> {
    Json(PortalService::schedule(state.store.as_ref(), &session).await)
}

/// Billing tab: balance report and per-student hours table
#[utoipa::path(
    get,
    path = "/api/portal/billing",
    responses(
        (status = 200, description = "Billing data", body = BillingResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Portal"
)]
#[instrument(skip(state, session))]
pub async fn get_billing(
    State(state): State<AppState>,
    session: ParentSession,
) -> Json<BillingResponse> {
    Json(PortalService::billing(state.balances.as_ref(), &session).await)
}
