use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::search_student;

pub fn init_contacts_router() -> Router<AppState> {
    Router::new().route("/search_student", get(search_student))
}
