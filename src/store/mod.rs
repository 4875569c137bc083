//! Read access to the tutoring center's store.
//!
//! Services never talk to the database directly. They go through two
//! capabilities:
//!
//! - [`PortalStore`]: exact-match keyed reads (phone to inquiry, inquiry to
//!   students, student to sessions, time slot to time of day)
//! - [`BalanceSource`]: the center's balance report, which yields several
//!   result sets per call
//!
//! [`PgPortalStore`] implements both against PostgreSQL. With the `test-utils`
//! feature, [`MemoryStore`] implements them over in-process fixtures.

use async_trait::async_trait;

use parentportal_core::AppError;
use parentportal_models::{
    BalanceResultSets, Inquiry, InquiryId, RawSession, Student, StudentId, TimeSlotId,
};

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use postgres::PgPortalStore;

#[async_trait]
pub trait PortalStore: Send + Sync {
    /// The inquiry whose stored contact phone equals `phone` exactly.
    async fn find_inquiry_by_phone(&self, phone: &str) -> Result<Option<Inquiry>, AppError>;

    /// Every student linked to `inquiry_id`, in storage order.
    async fn students_for_inquiry(&self, inquiry_id: InquiryId) -> Result<Vec<Student>, AppError>;

    /// Every schedule row of `student_id`, in storage order.
    async fn sessions_for_student(&self, student_id: StudentId)
    -> Result<Vec<RawSession>, AppError>;

    /// The slot's time of day as `HH:MM:SS`, `None` when the slot or its time is missing.
    async fn time_for_slot(&self, time_id: TimeSlotId) -> Result<Option<String>, AppError>;
}

#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Runs the balance report for `inquiry_id` and returns all of its result sets.
    async fn account_balance(&self, inquiry_id: InquiryId)
    -> Result<BalanceResultSets, AppError>;
}
