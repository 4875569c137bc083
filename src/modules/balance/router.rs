use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::get_balance;

pub fn init_balance_router() -> Router<AppState> {
    Router::new().route("/get_balance/{inquiry_id}", get(get_balance))
}
