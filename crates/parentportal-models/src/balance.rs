//! Tutoring-hour balance models.
//!
//! The center computes balances with a stored report that yields three
//! result sets. [`BalanceResultSets`] carries them unshaped; the balance
//! service turns them into a [`BalanceReport`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One result-set row, column name to value.
pub type ResultRow = Map<String, Value>;

/// Column holding purchased hours.
pub const PURCHASES: &str = "Purchases";
/// Column holding hours consumed by attended sessions.
pub const ATTENDANCE_PRESENT: &str = "AttendancePresent";
/// Column holding hours charged for unexcused absences.
pub const UNEXCUSED_ABSENCES: &str = "UnexcusedAbsences";
/// Column holding manual adjustments.
pub const MISC_ADJUSTMENTS: &str = "MiscAdjustments";

/// The raw result sets of the balance report, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceResultSets {
    pub sets: Vec<Vec<ResultRow>>,
}

impl BalanceResultSets {
    pub fn new(sets: Vec<Vec<ResultRow>>) -> Self {
        Self { sets }
    }

    /// Rows of the result set at `index`, empty when the report produced fewer sets.
    pub fn set(&self, index: usize) -> &[ResultRow] {
        self.sets.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A parent's balance as shown on the portal.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct BalanceReport {
    /// Fields of the balance row, keyed by report column name.
    #[schema(value_type = Object)]
    pub balance: ResultRow,
    /// Additional rows the report returns after the balance row.
    #[schema(value_type = Vec<Object>)]
    pub extra: Vec<ResultRow>,
    pub remaining_hours: f64,
}

impl BalanceReport {
    /// The degraded report used whenever the balance cannot be computed.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One row of the billing table: a student and the hours left on the family account.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BalanceTableRow {
    pub student_name: String,
    pub hours_remaining: f64,
    pub last_payment: String,
}
