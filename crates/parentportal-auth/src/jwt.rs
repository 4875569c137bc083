//! JWT creation and verification for parent session tokens.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use parentportal_config::JwtConfig;
use parentportal_core::AppError;

use crate::claims::{ParentClaims, SessionSubject};

/// Signs a session token for `subject`, valid for the configured expiry.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_session_token(
    subject: SessionSubject,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = (now + jwt_config.access_token_expiry).max(0) as usize;

    let claims = ParentClaims {
        sub: subject.inquiry_id.to_string(),
        inquiry_id: subject.inquiry_id,
        contact_number: subject.contact_number,
        username: subject.username,
        student_ids: subject.student_ids,
        students: subject.students,
        exp,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error for malformed, tampered or expired tokens.
pub fn verify_session_token(token: &str, jwt_config: &JwtConfig) -> Result<ParentClaims, AppError> {
    decode::<ParentClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}
