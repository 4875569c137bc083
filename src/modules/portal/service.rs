use tracing::{instrument, warn};

use crate::metrics::track_portal_warning;
use crate::middleware::auth::ParentSession;
use crate::modules::balance::BalanceService;
use crate::modules::sessions::SessionService;
use crate::store::{BalanceSource, PortalStore};

use super::model::{
    BalanceReport, BalanceTableRow, BillingResponse, DashboardResponse, NO_LAST_PAYMENT,
    ScheduleViewResponse,
};

/// Builds the logged-in pages. Pages never fail: a failed lookup is reported
/// in `warning` and the page falls back to empty data.
pub struct PortalService;

impl PortalService {
    #[instrument(skip(store, balances, session), fields(inquiry_id = %session.inquiry_id()))]
    pub async fn dashboard(
        store: &dyn PortalStore,
        balances: &dyn BalanceSource,
        session: &ParentSession,
    ) -> DashboardResponse {
        let username = session.username().to_string();
        let students = session.students().to_vec();

        match SessionService::get_sessions_for_students(store, &session.student_ids()).await {
            Ok(sessions) => {
                let (recent_sessions, upcoming_sessions): (Vec<_>, Vec<_>) =
                    sessions.iter().cloned().partition(|s| s.is_recent());
                let balance =
                    BalanceService::get_hours_balance(balances, session.inquiry_id()).await;

                DashboardResponse {
                    username,
                    students,
                    sessions,
                    recent_sessions,
                    upcoming_sessions,
                    balance,
                    warning: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to load dashboard");
                track_portal_warning("dashboard");
                DashboardResponse {
                    username,
                    students,
                    sessions: Vec::new(),
                    recent_sessions: Vec::new(),
                    upcoming_sessions: Vec::new(),
                    balance: BalanceReport::empty(),
                    warning: Some(format!("Error loading dashboard: {}", e)),
                }
            }
        }
    }

    #[instrument(skip(store, session), fields(inquiry_id = %session.inquiry_id()))]
    pub async fn schedule(store: &dyn PortalStore, session: &ParentSession) -> ScheduleViewResponse {
        let (sessions, warning) =
            match SessionService::get_sessions_for_students(store, &session.student_ids()).await {
                Ok(sessions) => (sessions, None),
                Err(e) => {
                    warn!(error = %e, "Failed to load schedule");
                    track_portal_warning("schedule");
                    (Vec::new(), Some(format!("Error loading schedule: {}", e)))
                }
            };

        ScheduleViewResponse {
            username: session.username().to_string(),
            students: session.students().to_vec(),
            sessions,
            warning,
        }
    }

    /// The balance lookup degrades on its own, so billing always renders.
    #[instrument(skip(balances, session), fields(inquiry_id = %session.inquiry_id()))]
    pub async fn billing(balances: &dyn BalanceSource, session: &ParentSession) -> BillingResponse {
        let balance = BalanceService::get_hours_balance(balances, session.inquiry_id()).await;
        let balance_table = Self::balance_table(session.students(), &balance);

        BillingResponse {
            username: session.username().to_string(),
            students: session.students().to_vec(),
            balance,
            balance_table,
            warning: None,
        }
    }

    /// One row per student; hours are tracked per family, so every row shows
    /// the same remaining hours.
    pub fn balance_table(students: &[String], balance: &BalanceReport) -> Vec<BalanceTableRow> {
        students
            .iter()
            .map(|student| BalanceTableRow {
                student_name: student.clone(),
                hours_remaining: balance.remaining_hours,
                last_payment: NO_LAST_PAYMENT.to_string(),
            })
            .collect()
    }
}
