use serde::Deserialize;
use utoipa::IntoParams;

use parentportal_core::deserialize_blank_as_none;

pub use parentportal_models::{
    RawSession, ScheduleResponse, SessionCategory, SessionRecord, StudentSessionsResponse,
};

/// Query of `GET /api/schedule`. The id stays a string so a missing value and
/// a non-numeric value can be reported differently.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ScheduleQuery {
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    #[param(example = "11")]
    pub student_id: Option<String>,
}
