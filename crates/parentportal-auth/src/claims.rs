//! JWT claims for parent session tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who a session token is issued for, before timestamps are added.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSubject {
    pub inquiry_id: i32,
    pub contact_number: String,
    pub username: String,
    pub student_ids: Vec<i32>,
    pub students: Vec<String>,
}

/// Claims embedded in a parent session token.
///
/// # Fields
///
/// - `sub`: Inquiry ID as a string (subject)
/// - `inquiry_id`: Inquiry ID
/// - `contact_number`: Phone number the parent logged in with
/// - `username`: Display name (the inquiry's email, or `Parent`)
/// - `student_ids` / `students`: The parent's students, ids and full names in the same order
/// - `exp` / `iat`: Expiry and issued-at Unix timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ParentClaims {
    pub sub: String,
    pub inquiry_id: i32,
    pub contact_number: String,
    pub username: String,
    pub student_ids: Vec<i32>,
    pub students: Vec<String>,
    pub exp: usize,
    pub iat: usize,
}
