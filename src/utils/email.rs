use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::instrument;

use parentportal_config::EmailConfig;
use parentportal_core::AppError;
use parentportal_models::ScheduleChangeRequest;

/// Who submitted a schedule change request, when known.
#[derive(Debug, Clone, Default)]
pub struct RequestSender {
    pub username: Option<String>,
    pub contact_number: Option<String>,
}

pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Relays a parent's schedule change request to the center's inbox.
    #[instrument(skip(self, request))]
    pub async fn send_schedule_change_request(
        &self,
        request: &ScheduleChangeRequest,
        sender: &RequestSender,
    ) -> Result<(), AppError> {
        let subject = format!("Schedule change request: {}", request.student_name());
        let fields = request_fields(request, sender);

        let text_body = schedule_change_text(&fields);
        let html_body = schedule_change_html(&fields);

        self.send_email(&self.config.center_email, &subject, &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal_error(format!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal_error(format!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal_error(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal_error(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal_error(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}

fn request_fields<'a>(
    request: &'a ScheduleChangeRequest,
    sender: &'a RequestSender,
) -> Vec<(&'static str, &'a str)> {
    let or_blank = |value: &'a Option<String>| -> &'a str { value.as_deref().unwrap_or("").trim() };

    vec![
        ("Student", request.student_name()),
        ("Current session", or_blank(&request.current_session)),
        ("Requested change", or_blank(&request.requested_change)),
        ("Reason", or_blank(&request.reason)),
        ("Preferred date", or_blank(&request.preferred_date)),
        ("Preferred time", or_blank(&request.preferred_time)),
        ("Submitted by", or_blank(&sender.username)),
        ("Contact number", or_blank(&sender.contact_number)),
    ]
}

fn schedule_change_text(fields: &[(&str, &str)]) -> String {
    let mut body = String::from("A parent submitted a schedule change request.\n\n");
    for (label, value) in fields.iter().filter(|(_, value)| !value.is_empty()) {
        body.push_str(&format!("{}: {}\n", label, value));
    }
    body
}

fn schedule_change_html(fields: &[(&str, &str)]) -> String {
    let rows: String = fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| {
            format!(
                r#"<tr><td style="padding: 6px 12px; color: #666666;"><strong>{}</strong></td><td style="padding: 6px 12px; color: #333333;">{}</td></tr>"#,
                label,
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Schedule Change Request</title>
</head>
<body style="margin: 0; padding: 20px; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px;">
        <tr>
            <td style="background-color: #4F46E5; padding: 20px; text-align: center;">
                <h1 style="margin: 0; color: #ffffff; font-size: 22px;">Schedule Change Request</h1>
            </td>
        </tr>
        <tr>
            <td style="padding: 20px;">
                <table cellpadding="0" cellspacing="0">{}</table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
        rows
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
