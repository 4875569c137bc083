//! # Parent Portal Core
//!
//! Core types, errors, and utilities for the Parent Portal API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`serde`]: Lenient value helpers used when shaping loosely typed store rows
//!
//! # Example
//!
//! ```ignore
//! use parentportal_core::errors::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Parent not found"));
//! ```

pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use serde::{deserialize_blank_as_none, lenient_f64};
