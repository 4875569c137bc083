//! Strongly-typed ID newtypes for domain entities.
//!
//! The tutoring center's store keys every table with an integer identity
//! column. Wrapping them prevents passing a [`StudentId`] where an
//! [`InquiryId`] is expected.
//!
//! # Example
//!
//! ```ignore
//! use parentportal_models::ids::{InquiryId, StudentId};
//!
//! fn balance_for(inquiry: InquiryId) { /* ... */ }
//!
//! balance_for(InquiryId(42));      // OK
//! // balance_for(StudentId(42));   // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Generates an `i32`-backed ID newtype that encodes, decodes and
/// serializes exactly like the bare integer.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
            sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        #[schema(value_type = i32)]
        pub struct $name(pub i32);

        impl $name {
            /// Get the inner integer value.
            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            #[inline]
            fn from(v: i32) -> Self {
                Self(v)
            }
        }

        impl From<$name> for i32 {
            #[inline]
            fn from(id: $name) -> i32 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of an inquiry (parent/guardian billing unit).
    InquiryId
);

define_id!(
    /// Identifier of a student.
    StudentId
);

define_id!(
    /// Identifier of a time slot in the center's timetable.
    TimeSlotId
);
