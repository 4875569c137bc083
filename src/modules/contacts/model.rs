use serde::Deserialize;
use utoipa::IntoParams;

use parentportal_core::deserialize_blank_as_none;

pub use parentportal_models::{ContactLookup, Inquiry, SearchStudentResponse, StudentWithSessions};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchStudentQuery {
    /// Phone number exactly as stored on the inquiry.
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    #[param(example = "555-0100")]
    pub contact_num: Option<String>,
}
