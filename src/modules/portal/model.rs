pub use parentportal_models::{
    BalanceReport, BalanceTableRow, BillingResponse, DashboardResponse, ScheduleViewResponse,
};

/// Shown in the billing table until payments are tracked.
pub const NO_LAST_PAYMENT: &str = "N/A";
