use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use parentportal_models::{
    BalanceReport, BalanceTableRow, BillingResponse, DashboardResponse, Inquiry, LoginRequest,
    LoginResponse, MessageResponse, ScheduleChangeRequest, ScheduleChangeResponse,
    ScheduleResponse, ScheduleViewResponse, SearchStudentResponse, SessionCategory, SessionRecord,
    Student, StudentSessionsResponse, StudentWithSessions,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::contacts::controller::search_student,
        crate::modules::sessions::controller::get_schedule,
        crate::modules::sessions::controller::get_schedule_data,
        crate::modules::sessions::controller::get_student_sessions,
        crate::modules::balance::controller::get_balance,
        crate::modules::schedule_requests::controller::submit_schedule_change_request,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::portal::controller::get_dashboard,
        crate::modules::portal::controller::get_schedule_view,
        crate::modules::portal::controller::get_billing,
        crate::modules::schedule_requests::controller::submit_portal_schedule_change_request,
    ),
    components(
        schemas(
            Inquiry,
            Student,
            StudentWithSessions,
            SearchStudentResponse,
            SessionCategory,
            SessionRecord,
            ScheduleResponse,
            StudentSessionsResponse,
            BalanceReport,
            BalanceTableRow,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ScheduleChangeRequest,
            ScheduleChangeResponse,
            DashboardResponse,
            ScheduleViewResponse,
            BillingResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Contacts", description = "Parent lookup by phone number"),
        (name = "Sessions", description = "Current-month session schedules"),
        (name = "Balance", description = "Remaining tutoring hours"),
        (name = "Schedule Requests", description = "Schedule change requests"),
        (name = "Authentication", description = "Parent login by phone number"),
        (name = "Portal", description = "Logged-in parent pages")
    ),
    info(
        title = "Parent Portal API",
        version = "0.1.0",
        description = "Parent-facing tutoring center portal: class schedules, remaining hours and schedule change requests.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
