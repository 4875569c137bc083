use std::env;

use crate::env_flag;

#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_email: String,
    pub from_name: String,
    /// Inbox that receives schedule change requests submitted by parents.
    pub center_email: String,
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: env_flag("SMTP_ENABLED", false),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1025),
            smtp_username: env::var("SMTP_USERNAME").unwrap_or_else(|_| "".to_string()),
            smtp_password: env::var("SMTP_PASSWORD").unwrap_or_else(|_| "".to_string()),
            from_email: env::var("FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@parentportal.local".to_string()),
            from_name: env::var("FROM_NAME").unwrap_or_else(|_| "Parent Portal".to_string()),
            center_email: env::var("CENTER_EMAIL")
                .unwrap_or_else(|_| "frontdesk@parentportal.local".to_string()),
        }
    }

    /// Configuration with relaying switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::from_env()
        }
    }
}
