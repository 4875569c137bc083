use tracing::{info, instrument, warn};

use crate::metrics::track_schedule_change_request;
use crate::utils::email::{EmailService, RequestSender};
use parentportal_config::EmailConfig;
use parentportal_core::AppError;

use super::model::{RequestSource, ScheduleChangeRequest, ScheduleChangeResponse};

pub struct ScheduleRequestService;

impl ScheduleRequestService {
    /// Acknowledges a schedule change request and, when email is enabled,
    /// relays it to the center. Requests are not stored; a failed relay is
    /// logged and the request is still acknowledged.
    #[instrument(skip(email_config, request, sender))]
    pub async fn submit(
        email_config: &EmailConfig,
        request: ScheduleChangeRequest,
        sender: RequestSender,
        source: RequestSource,
    ) -> Result<ScheduleChangeResponse, AppError> {
        let student_name = request.student_name();
        if student_name.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "Student name is required."
            )));
        }

        let email_service = EmailService::new(email_config.clone());
        let relayed = if email_service.is_enabled() {
            match email_service
                .send_schedule_change_request(&request, &sender)
                .await
            {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Failed to relay schedule change request to the center");
                    false
                }
            }
        } else {
            false
        };

        track_schedule_change_request(source.as_str(), relayed);
        info!(source = source.as_str(), relayed, "Schedule change request submitted");

        Ok(ScheduleChangeResponse {
            success: true,
            message: source.acknowledgement(student_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn request(name: &str) -> ScheduleChangeRequest {
        ScheduleChangeRequest {
            student_name: Some(name.to_string()),
            current_session: Some("Monday 4:00 PM".to_string()),
            requested_change: Some("Move to Wednesday".to_string()),
            reason: None,
            preferred_date: None,
            preferred_time: None,
        }
    }

    #[tokio::test]
    async fn test_api_acknowledgement() {
        let response = ScheduleRequestService::submit(
            &EmailConfig::disabled(),
            request("Ada Lovelace"),
            RequestSender::default(),
            RequestSource::Api,
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(
            response.message,
            "Schedule change request submitted for Ada Lovelace"
        );
    }

    #[tokio::test]
    async fn test_portal_acknowledgement() {
        let response = ScheduleRequestService::submit(
            &EmailConfig::disabled(),
            request(" Ada Lovelace "),
            RequestSender::default(),
            RequestSource::Portal,
        )
        .await
        .unwrap();

        assert_eq!(
            response.message,
            "Schedule change request submitted successfully for Ada Lovelace. The center will be notified."
        );
    }

    #[tokio::test]
    async fn test_blank_student_name_rejected() {
        let err = ScheduleRequestService::submit(
            &EmailConfig::disabled(),
            request("   "),
            RequestSender::default(),
            RequestSource::Portal,
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_relay_failure_still_acknowledged() {
        let config = EmailConfig {
            enabled: true,
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: "noreply@parentportal.local".to_string(),
            from_name: "Parent Portal".to_string(),
            center_email: "not an address".to_string(),
        };

        let response = ScheduleRequestService::submit(
            &config,
            request("Ada Lovelace"),
            RequestSender::default(),
            RequestSource::Api,
        )
        .await
        .unwrap();

        assert!(response.success);
    }
}
