//! # Parent Portal Models
//!
//! Domain models and DTOs for the Parent Portal API.
//!
//! # Modules
//!
//! - [`auth`]: Login request/response and session claims
//! - [`balance`]: Balance report result sets and the shaped report
//! - [`ids`]: Typed integer identifiers
//! - [`inquiries`]: Parent records and the contact lookup result
//! - [`portal`]: Dashboard, schedule and billing page responses
//! - [`schedule_requests`]: Schedule change request form
//! - [`sessions`]: Raw schedule rows and aggregated session records
//! - [`students`]: Student records
//!
//! # Example
//!
//! ```ignore
//! use parentportal_models::{SessionCategory, SessionRecord, StudentId};
//!
//! let upcoming: Vec<&SessionRecord> = sessions.iter().filter(|s| s.is_upcoming()).collect();
//! ```

pub mod auth;
pub mod balance;
pub mod ids;
pub mod inquiries;
pub mod portal;
pub mod schedule_requests;
pub mod sessions;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse, MessageResponse, ParentClaims};
pub use balance::{BalanceReport, BalanceResultSets, BalanceTableRow, ResultRow};
pub use ids::{InquiryId, StudentId, TimeSlotId};
pub use inquiries::{ContactLookup, Inquiry, SearchStudentResponse};
pub use portal::{BillingResponse, DashboardResponse, ScheduleViewResponse};
pub use schedule_requests::{ScheduleChangeRequest, ScheduleChangeResponse};
pub use sessions::{
    RawSession, ScheduleResponse, SessionCategory, SessionRecord, StudentSessionsResponse,
};
pub use students::{Student, StudentWithSessions};
