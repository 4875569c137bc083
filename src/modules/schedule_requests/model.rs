pub use parentportal_models::{ScheduleChangeRequest, ScheduleChangeResponse};

/// Where a request was submitted from, used as a metrics label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    /// The unauthenticated lookup API.
    Api,
    /// The logged-in portal.
    Portal,
}

impl RequestSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestSource::Api => "api",
            RequestSource::Portal => "portal",
        }
    }

    /// Acknowledgement shown to the parent.
    pub fn acknowledgement(self, student_name: &str) -> String {
        match self {
            RequestSource::Api => {
                format!("Schedule change request submitted for {}", student_name)
            }
            RequestSource::Portal => format!(
                "Schedule change request submitted successfully for {}. The center will be notified.",
                student_name
            ),
        }
    }
}
