//! Request extractors.
//!
//! - [`auth`]: [`auth::ParentSession`], the logged-in parent decoded from the
//!   `Authorization: Bearer <token>` header
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::ParentSession;
//!
//! async fn dashboard(session: ParentSession) -> impl IntoResponse {
//!     let inquiry_id = session.inquiry_id();
//!     // ...
//! }
//! ```

pub mod auth;
