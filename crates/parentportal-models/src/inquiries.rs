//! Inquiry (parent/guardian) models and the contact lookup result.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::balance::BalanceReport;
use crate::ids::InquiryId;
use crate::students::{Student, StudentWithSessions};

/// A parent/guardian record; the billing unit that owns students.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Inquiry {
    pub inquiry_id: InquiryId,
    pub email: Option<String>,
    pub contact_phone: Option<String>,
}

impl Inquiry {
    /// Name the portal greets the parent with.
    pub fn display_name(&self) -> String {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or("Parent")
            .to_string()
    }
}

/// An inquiry resolved from a phone number, with every student it owns.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContactLookup {
    pub inquiry: Inquiry,
    pub students: Vec<Student>,
}

/// Response of `GET /api/search_student`.
#[derive(Serialize, Debug, ToSchema)]
pub struct SearchStudentResponse {
    pub success: bool,
    pub inquiry_id: InquiryId,
    pub parent: BalanceReport,
    pub students: Vec<StudentWithSessions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_defaults_to_parent() {
        let inquiry = Inquiry {
            inquiry_id: InquiryId(1),
            email: None,
            contact_phone: Some("555-0100".to_string()),
        };
        assert_eq!(inquiry.display_name(), "Parent");

        let blank = Inquiry {
            email: Some("  ".to_string()),
            ..inquiry.clone()
        };
        assert_eq!(blank.display_name(), "Parent");

        let named = Inquiry {
            email: Some("mom@example.com".to_string()),
            ..inquiry
        };
        assert_eq!(named.display_name(), "mom@example.com");
    }
}
