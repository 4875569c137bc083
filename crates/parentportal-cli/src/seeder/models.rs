//! Seed records and the knobs that size a seeding run.

use chrono::NaiveDate;
use parentportal_models::{InquiryId, StudentId};

/// Every seeded parent gets an address under this domain; clearing matches on it.
pub const SEED_EMAIL_DOMAIN: &str = "example.com";

pub struct FamilySeed {
    pub email: String,
    pub contact_phone: String,
    pub purchased_hours: f64,
    pub students: Vec<StudentSeed>,
}

pub struct StudentSeed {
    pub first_name: String,
    pub last_name: String,
    pub sessions: Vec<SessionSeed>,
}

/// One scheduled session. `slot` indexes into the center's time slots.
pub struct SessionSeed {
    pub date: NaiveDate,
    pub slot: Option<usize>,
    /// Set only for past sessions.
    pub attendance: Option<&'static str>,
}

/// A student row once its parent has been inserted.
pub struct StudentRow<'a> {
    pub inquiry_id: InquiryId,
    pub seed: &'a StudentSeed,
}

/// A session row once its student has been inserted.
pub struct SessionRow<'a> {
    pub student_id: StudentId,
    pub seed: &'a SessionSeed,
}

#[derive(Clone)]
pub struct SeedConfig {
    pub families: usize,
    pub students_per_family: usize,
    pub sessions_per_student: usize,
    /// Sessions are spread this many days either side of today.
    pub window_days: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            families: 10,
            students_per_family: 2,
            sessions_per_student: 8,
            window_days: 28,
        }
    }
}

impl SeedConfig {
    pub fn new(families: usize) -> Self {
        Self {
            families,
            ..Default::default()
        }
    }

    pub fn with_students(mut self, students_per_family: usize) -> Self {
        self.students_per_family = students_per_family;
        self
    }

    pub fn with_sessions(mut self, sessions_per_student: usize) -> Self {
        self.sessions_per_student = sessions_per_student;
        self
    }

    pub fn total_students(&self) -> usize {
        self.families * self.students_per_family
    }

    pub fn total_sessions(&self) -> usize {
        self.total_students() * self.sessions_per_student
    }
}
