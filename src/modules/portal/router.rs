use crate::modules::schedule_requests::controller::submit_portal_schedule_change_request;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_billing, get_dashboard, get_schedule_view};

/// Logged-in pages. Every handler takes a `ParentSession`, so each route
/// answers 401 without a valid bearer token.
pub fn init_portal_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/schedule", get(get_schedule_view))
        .route("/billing", get(get_billing))
        .route(
            "/schedule-change-request",
            post(submit_portal_schedule_change_request),
        )
}
