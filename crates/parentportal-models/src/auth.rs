//! Login/logout models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::{InquiryId, StudentId};

// Re-export the session claims so handlers only need this crate
pub use parentportal_auth::ParentClaims;

/// Login with the phone number the center has on file.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 50, message = "Contact number is required."))]
    #[schema(example = "555-0100")]
    pub contact_number: String,
}

/// Successful login: a bearer token carrying the parent's portal context.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub inquiry_id: InquiryId,
    pub username: String,
    pub students: Vec<String>,
    pub student_ids: Vec<StudentId>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_number() {
        let empty = LoginRequest {
            contact_number: String::new(),
        };
        assert!(empty.validate().is_err());

        let ok = LoginRequest {
            contact_number: "555-0100".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
