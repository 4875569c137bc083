use tracing::{info, instrument};

use crate::metrics::{track_login_failure, track_login_success, track_session_token_issued};
use crate::modules::contacts::ContactService;
use crate::store::PortalStore;
use parentportal_auth::{SessionSubject, create_session_token};
use parentportal_config::JwtConfig;
use parentportal_core::AppError;
use parentportal_models::Student;

use super::model::{CONTACT_NOT_FOUND, LoginRequest, LoginResponse, welcome_message};

pub struct AuthService;

impl AuthService {
    /// Logs a parent in with the phone number on file.
    ///
    /// The issued token snapshots the parent's students; pages served with it
    /// show the students as they were at login.
    #[instrument(skip(store, dto, jwt_config))]
    pub async fn login(
        store: &dyn PortalStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let contact_number = dto.contact_number.trim();
        if contact_number.is_empty() {
            track_login_failure("missing_contact");
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "Contact number is required."
            )));
        }

        let Some(lookup) = ContactService::find_inquiry_by_contact_phone(store, contact_number).await?
        else {
            track_login_failure("unknown_contact");
            return Err(AppError::not_found(anyhow::anyhow!(CONTACT_NOT_FOUND)));
        };

        let username = lookup.inquiry.display_name();
        let inquiry_id = lookup.inquiry.inquiry_id;
        let students: Vec<String> = lookup.students.iter().map(Student::full_name).collect();
        let student_ids: Vec<_> = lookup.students.iter().map(|s| s.id).collect();

        let access_token = create_session_token(
            SessionSubject {
                inquiry_id: inquiry_id.into_inner(),
                contact_number: contact_number.to_string(),
                username: username.clone(),
                student_ids: student_ids.iter().map(|id| id.into_inner()).collect(),
                students: students.clone(),
            },
            jwt_config,
        )?;
        track_session_token_issued();
        track_login_success(students.len());

        info!(inquiry_id = %inquiry_id, students = students.len(), "Parent logged in");

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            inquiry_id,
            username,
            message: welcome_message(students.len()),
            students,
            student_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use axum::http::StatusCode;
    use parentportal_auth::verify_session_token;
    use parentportal_models::{Inquiry, InquiryId, StudentId};

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_inquiry(Inquiry {
                inquiry_id: InquiryId(7),
                email: Some("mom@example.com".to_string()),
                contact_phone: Some("555-0100".to_string()),
            })
            .with_inquiry(Inquiry {
                inquiry_id: InquiryId(8),
                email: None,
                contact_phone: Some("555-0199".to_string()),
            })
            .with_student(
                InquiryId(7),
                Student {
                    id: StudentId(11),
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                },
            )
            .with_student(
                InquiryId(7),
                Student {
                    id: StudentId(12),
                    first_name: "Alan".to_string(),
                    last_name: "Turing".to_string(),
                },
            )
    }

    fn login_request(contact_number: &str) -> LoginRequest {
        LoginRequest {
            contact_number: contact_number.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_with_students() {
        let config = jwt_config();
        let response = AuthService::login(&store(), login_request("555-0100"), &config)
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.inquiry_id, InquiryId(7));
        assert_eq!(response.username, "mom@example.com");
        assert_eq!(response.students, vec!["Ada Lovelace", "Alan Turing"]);
        assert_eq!(response.student_ids, vec![StudentId(11), StudentId(12)]);
        assert_eq!(response.message, "Welcome back! Found 2 student(s).");

        let claims = verify_session_token(&response.access_token, &config).unwrap();
        assert_eq!(claims.inquiry_id, 7);
        assert_eq!(claims.contact_number, "555-0100");
        assert_eq!(claims.student_ids, vec![11, 12]);
    }

    #[tokio::test]
    async fn test_login_without_email_uses_parent() {
        let response = AuthService::login(&store(), login_request("555-0199"), &jwt_config())
            .await
            .unwrap();

        assert_eq!(response.username, "Parent");
        assert!(response.students.is_empty());
        assert_eq!(response.message, "Welcome back! Found 0 student(s).");
    }

    #[tokio::test]
    async fn test_login_unknown_contact() {
        let err = AuthService::login(&store(), login_request("555-0000"), &jwt_config())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message(), CONTACT_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_blank_contact() {
        let err = AuthService::login(&store(), login_request("   "), &jwt_config())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_login_trims_contact_number() {
        let response = AuthService::login(&store(), login_request(" 555-0100 "), &jwt_config())
            .await
            .unwrap();
        assert_eq!(response.inquiry_id, InquiryId(7));
    }
}
