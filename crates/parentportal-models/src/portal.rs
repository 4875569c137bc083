//! Response shapes of the logged-in portal pages.
//!
//! Each page degrades instead of failing: when a lookup errors the lists are
//! empty and `warning` carries the message to show the parent.

use serde::Serialize;
use utoipa::ToSchema;

use crate::balance::{BalanceReport, BalanceTableRow};
use crate::sessions::SessionRecord;

#[derive(Serialize, Debug, ToSchema)]
pub struct DashboardResponse {
    pub username: String,
    pub students: Vec<String>,
    pub sessions: Vec<SessionRecord>,
    pub recent_sessions: Vec<SessionRecord>,
    pub upcoming_sessions: Vec<SessionRecord>,
    pub balance: BalanceReport,
    pub warning: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ScheduleViewResponse {
    pub username: String,
    pub students: Vec<String>,
    pub sessions: Vec<SessionRecord>,
    pub warning: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct BillingResponse {
    pub username: String,
    pub students: Vec<String>,
    pub balance: BalanceReport,
    pub balance_table: Vec<BalanceTableRow>,
    pub warning: Option<String>,
}
