//! Schedule change requests submitted by parents.
//!
//! Requests are acknowledged and optionally relayed to the center by email;
//! they are not stored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ScheduleChangeRequest {
    #[validate(
        required(message = "Student name is required."),
        length(min = 1, max = 200, message = "Student name must be 1 to 200 characters.")
    )]
    pub student_name: Option<String>,
    #[validate(length(max = 200))]
    pub current_session: Option<String>,
    #[validate(length(max = 500))]
    pub requested_change: Option<String>,
    #[validate(length(max = 2000, message = "Reason must be at most 2000 characters."))]
    pub reason: Option<String>,
    #[validate(length(max = 50))]
    pub preferred_date: Option<String>,
    #[validate(length(max = 50))]
    pub preferred_time: Option<String>,
}

impl ScheduleChangeRequest {
    pub fn student_name(&self) -> &str {
        self.student_name.as_deref().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleChangeResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>) -> ScheduleChangeRequest {
        ScheduleChangeRequest {
            student_name: name.map(str::to_string),
            current_session: Some("Monday 4:00 PM".to_string()),
            requested_change: Some("Move to Wednesday".to_string()),
            reason: None,
            preferred_date: Some("2026-10-21".to_string()),
            preferred_time: Some("4:00 PM".to_string()),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request(Some("Ada Lovelace")).validate().is_ok());
    }

    #[test]
    fn test_missing_student_name() {
        assert!(request(None).validate().is_err());
        assert!(request(Some("")).validate().is_err());
    }

    #[test]
    fn test_reason_too_long() {
        let mut req = request(Some("Ada"));
        req.reason = Some("x".repeat(2001));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_student_name_trimmed() {
        assert_eq!(request(Some("  Ada ")).student_name(), "Ada");
    }
}
