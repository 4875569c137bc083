//! # Parent Portal CLI
//!
//! Database seeding utilities for local development of the parent portal.
//!
//! ## Usage
//!
//! ```ignore
//! use parentportal_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(20); // 20 families with defaults
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
