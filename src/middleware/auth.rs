use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::metrics::track_session_validation;
use crate::state::AppState;
use parentportal_auth::{ParentClaims, verify_session_token};
use parentportal_core::AppError;
use parentportal_models::{InquiryId, StudentId};

pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";

/// Extractor that validates the bearer token and provides the logged-in parent.
///
/// Every portal page rejects with 401 [`LOGIN_REQUIRED`] when the header is
/// missing, malformed, or carries an invalid or expired token.
#[derive(Debug, Clone)]
pub struct ParentSession(pub ParentClaims);

impl ParentSession {
    pub fn inquiry_id(&self) -> InquiryId {
        InquiryId(self.0.inquiry_id)
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    /// Student display names, in the order the students were looked up at login.
    pub fn students(&self) -> &[String] {
        &self.0.students
    }

    pub fn student_ids(&self) -> Vec<StudentId> {
        self.0.student_ids.iter().copied().map(StudentId).collect()
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for ParentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::unauthorized(LOGIN_REQUIRED.to_string()))?;

        match verify_session_token(token, &state.jwt_config) {
            Ok(claims) => {
                track_session_validation(true);
                Ok(ParentSession(claims))
            }
            Err(e) => {
                debug!(error = %e, "Rejected parent session token");
                track_session_validation(false);
                Err(AppError::unauthorized(LOGIN_REQUIRED.to_string()))
            }
        }
    }
}
