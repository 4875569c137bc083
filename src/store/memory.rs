use std::collections::HashMap;

use async_trait::async_trait;

use parentportal_core::AppError;
use parentportal_models::{
    BalanceResultSets, Inquiry, InquiryId, RawSession, Student, StudentId, TimeSlotId,
};

use super::{BalanceSource, PortalStore};

/// In-process fixture store. Built once with the `with_*` methods and then
/// shared read-only; the `failing_*` switches make the matching lookups error.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inquiries: Vec<Inquiry>,
    students: Vec<(InquiryId, Student)>,
    sessions: Vec<RawSession>,
    time_slots: HashMap<TimeSlotId, Option<String>>,
    balances: HashMap<InquiryId, BalanceResultSets>,
    fail_contacts: bool,
    fail_sessions: bool,
    fail_time_slots: bool,
    fail_balance: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inquiry(mut self, inquiry: Inquiry) -> Self {
        self.inquiries.push(inquiry);
        self
    }

    pub fn with_student(mut self, inquiry_id: InquiryId, student: Student) -> Self {
        self.students.push((inquiry_id, student));
        self
    }

    pub fn with_session(mut self, session: RawSession) -> Self {
        self.sessions.push(session);
        self
    }

    /// Registers a slot; `None` models a slot row whose time column is empty.
    pub fn with_time_slot(mut self, time_id: TimeSlotId, time: Option<&str>) -> Self {
        self.time_slots.insert(time_id, time.map(str::to_string));
        self
    }

    pub fn with_balance(mut self, inquiry_id: InquiryId, sets: BalanceResultSets) -> Self {
        self.balances.insert(inquiry_id, sets);
        self
    }

    pub fn failing_contacts(mut self) -> Self {
        self.fail_contacts = true;
        self
    }

    pub fn failing_sessions(mut self) -> Self {
        self.fail_sessions = true;
        self
    }

    pub fn failing_time_slots(mut self) -> Self {
        self.fail_time_slots = true;
        self
    }

    pub fn failing_balance(mut self) -> Self {
        self.fail_balance = true;
        self
    }
}

fn unavailable(what: &str) -> AppError {
    AppError::database(anyhow::anyhow!("{what}: store unavailable"))
}

#[async_trait]
impl PortalStore for MemoryStore {
    async fn find_inquiry_by_phone(&self, phone: &str) -> Result<Option<Inquiry>, AppError> {
        if self.fail_contacts {
            return Err(unavailable("Failed to look up inquiry by contact phone"));
        }
        Ok(self
            .inquiries
            .iter()
            .find(|i| i.contact_phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn students_for_inquiry(&self, inquiry_id: InquiryId) -> Result<Vec<Student>, AppError> {
        if self.fail_contacts {
            return Err(unavailable("Failed to fetch students for inquiry"));
        }
        Ok(self
            .students
            .iter()
            .filter(|(owner, _)| *owner == inquiry_id)
            .map(|(_, student)| student.clone())
            .collect())
    }

    async fn sessions_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<RawSession>, AppError> {
        if self.fail_sessions {
            return Err(unavailable("Failed to fetch sessions for student"));
        }
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn time_for_slot(&self, time_id: TimeSlotId) -> Result<Option<String>, AppError> {
        if self.fail_time_slots {
            return Err(unavailable("Failed to fetch time slot"));
        }
        Ok(self.time_slots.get(&time_id).cloned().flatten())
    }
}

#[async_trait]
impl BalanceSource for MemoryStore {
    async fn account_balance(
        &self,
        inquiry_id: InquiryId,
    ) -> Result<BalanceResultSets, AppError> {
        if self.fail_balance {
            return Err(unavailable("Failed to run balance report"));
        }
        self.balances
            .get(&inquiry_id)
            .cloned()
            .ok_or_else(|| AppError::database(anyhow::anyhow!("No balance report for inquiry {inquiry_id}")))
    }
}
