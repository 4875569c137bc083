//! Student domain models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::StudentId;
use crate::sessions::SessionRecord;

/// A student enrolled at the center, linked to exactly one inquiry.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    /// "First Last", as shown on the portal.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A student together with their aggregated sessions for the current month.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct StudentWithSessions {
    #[serde(flatten)]
    pub student: Student,
    pub sessions: Vec<SessionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let student = Student {
            id: StudentId(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert_eq!(student.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_missing_last_name() {
        let student = Student {
            id: StudentId(1),
            first_name: "Ada".to_string(),
            last_name: String::new(),
        };
        assert_eq!(student.full_name(), "Ada");
    }

    #[test]
    fn test_with_sessions_flattens_student() {
        let value = serde_json::to_value(StudentWithSessions {
            student: Student {
                id: StudentId(9),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            },
            sessions: vec![],
        })
        .unwrap();

        assert_eq!(value["id"], 9);
        assert_eq!(value["first_name"], "Grace");
        assert!(value["sessions"].as_array().unwrap().is_empty());
    }
}
