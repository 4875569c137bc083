pub use parentportal_models::{LoginRequest, LoginResponse, MessageResponse, ParentClaims};

pub const LOGOUT_MESSAGE: &str = "You have been logged out successfully.";
pub const CONTACT_NOT_FOUND: &str =
    "Contact number not found. Please check your number or contact the center.";

pub fn welcome_message(student_count: usize) -> String {
    format!("Welcome back! Found {} student(s).", student_count)
}
