use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::submit_schedule_change_request;

pub fn init_schedule_requests_router() -> Router<AppState> {
    Router::new().route(
        "/schedule-change-request",
        post(submit_schedule_change_request),
    )
}
