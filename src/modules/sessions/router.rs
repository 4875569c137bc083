use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::{get_schedule, get_schedule_data, get_student_sessions};

pub fn init_sessions_router() -> Router<AppState> {
    Router::new()
        .route("/get_schedule/{student_id}", get(get_schedule))
        .route("/schedule", get(get_schedule_data))
        .route("/student-sessions/{student_id}", get(get_student_sessions))
}
