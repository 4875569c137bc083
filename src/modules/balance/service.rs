use tracing::{instrument, warn};

use crate::metrics::track_balance_fallback;
use crate::store::BalanceSource;
use parentportal_core::lenient_f64;
use parentportal_models::balance::{
    ATTENDANCE_PRESENT, MISC_ADJUSTMENTS, PURCHASES, UNEXCUSED_ABSENCES,
};
use parentportal_models::{BalanceReport, BalanceResultSets, InquiryId};

/// Report result set holding the balance row. The set before it is the
/// account header and is not used.
const BALANCE_SET: usize = 1;
/// Report result set returned as `extra`.
const EXTRA_SET: usize = 2;

pub struct BalanceService;

impl BalanceService {
    /// Remaining tutoring hours of an inquiry.
    ///
    /// Never fails: when the report cannot be run, the failure is logged and
    /// [`BalanceReport::empty`] is returned.
    #[instrument(skip(source))]
    pub async fn get_hours_balance(
        source: &dyn BalanceSource,
        inquiry_id: InquiryId,
    ) -> BalanceReport {
        match source.account_balance(inquiry_id).await {
            Ok(sets) => Self::shape(&sets),
            Err(e) => {
                warn!(inquiry_id = %inquiry_id, error = %e, "Balance report failed, returning empty balance");
                track_balance_fallback();
                BalanceReport::empty()
            }
        }
    }

    /// Builds the report from raw result sets. Remaining hours are the plain
    /// sum of the four balance fields, each read as 0.0 when missing or not
    /// numeric.
    pub fn shape(sets: &BalanceResultSets) -> BalanceReport {
        let balance = sets.set(BALANCE_SET).first().cloned().unwrap_or_default();

        let remaining_hours = [PURCHASES, ATTENDANCE_PRESENT, UNEXCUSED_ABSENCES, MISC_ADJUSTMENTS]
            .iter()
            .map(|field| lenient_f64(balance.get(*field)))
            .sum();

        BalanceReport {
            balance,
            extra: sets.set(EXTRA_SET).to_vec(),
            remaining_hours,
        }
    }
}
