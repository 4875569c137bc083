//! # Parent Portal DB
//!
//! Database pool initialization for the Parent Portal API.
//!
//! The portal only reads from the tutoring center's store, so the pool is
//! small and every lookup checks a connection out for the duration of a
//! single query (or a single transaction for the balance report).
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//!
//! # Example
//!
//! ```ignore
//! use parentportal_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool().await?;
//!     Ok(())
//! }
//! ```

use std::env;

use sqlx::postgres::PgPoolOptions;

/// Reads `DATABASE_MAX_CONNECTIONS`, defaulting to 5.
pub fn max_connections_from_env() -> u32 {
    env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|n: &u32| *n > 0)
        .unwrap_or(5)
}

/// Initializes a PostgreSQL connection pool from `DATABASE_URL`.
///
/// # Errors
///
/// Returns [`sqlx::Error::Configuration`] when `DATABASE_URL` is not set, or
/// the connection error when the database cannot be reached.
pub async fn init_db_pool() -> Result<PgPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let max_connections = max_connections_from_env();
    tracing::info!(max_connections, "Connecting to database");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
