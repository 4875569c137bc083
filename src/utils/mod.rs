//! Shared utilities.
//!
//! - [`email`]: SMTP relay of schedule change requests to the center

pub mod email;
