//! Session (scheduled class occurrence) models.
//!
//! [`RawSession`] is a row exactly as the schedule table stores it. The
//! aggregator turns it into a [`SessionRecord`], adding a readable time label,
//! a normalized date and a [`SessionCategory`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::{StudentId, TimeSlotId};

/// A schedule row as stored. `schedule_date` is free-form text in the
/// center's schedule table.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct RawSession {
    pub day: Option<String>,
    pub time_id: Option<TimeSlotId>,
    pub schedule_date: Option<String>,
    pub student_id: StudentId,
}

/// Whether a session already happened this month or is still ahead.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionCategory {
    Recent,
    Upcoming,
}

/// A session shaped for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SessionRecord {
    pub day: Option<String>,
    pub time_id: Option<TimeSlotId>,
    pub schedule_date: Option<String>,
    pub student_id: StudentId,
    /// Time of day such as `"1:00 PM"`; `"Unknown"` when the row has no slot.
    pub time: Option<String>,
    /// Normalized `YYYY-MM-DD` date.
    pub formatted_date: Option<String>,
    pub category: SessionCategory,
}

impl SessionRecord {
    /// Starts a record from a raw row with no derived fields yet.
    pub fn from_raw(raw: RawSession, category: SessionCategory) -> Self {
        Self {
            day: raw.day,
            time_id: raw.time_id,
            schedule_date: raw.schedule_date,
            student_id: raw.student_id,
            time: None,
            formatted_date: None,
            category,
        }
    }

    pub fn is_recent(&self) -> bool {
        self.category == SessionCategory::Recent
    }

    pub fn is_upcoming(&self) -> bool {
        self.category == SessionCategory::Upcoming
    }
}

/// Response of `GET /api/student-sessions/{student_id}`.
#[derive(Serialize, Debug, ToSchema)]
pub struct StudentSessionsResponse {
    pub all_sessions: Vec<SessionRecord>,
    pub upcoming_sessions: Vec<SessionRecord>,
    pub session_timeline: Vec<SessionRecord>,
}

/// Response of `GET /api/schedule`.
#[derive(Serialize, Debug, ToSchema)]
pub struct ScheduleResponse {
    pub sessions: Vec<SessionRecord>,
    pub student_id: StudentId,
    pub upcoming_sessions: Vec<SessionRecord>,
    pub session_timeline: Vec<SessionRecord>,
}
