//! # Parent Portal Auth
//!
//! Parent session tokens for the Parent Portal API.
//!
//! A parent logs in with the phone number on file and receives a signed
//! bearer token. The token carries everything the portal pages need to know
//! about the parent (inquiry, display name, students), so each request is
//! served from its own explicit context instead of server-side session state.
//!
//! - [`claims`]: The [`ParentClaims`] embedded in the token
//! - [`jwt`]: Token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use parentportal_auth::{ParentClaims, create_session_token, verify_session_token};
//! use parentportal_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_session_token(claims_input, &config)?;
//! let claims = verify_session_token(&token, &config)?;
//! println!("Inquiry: {}", claims.inquiry_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{ParentClaims, SessionSubject};
pub use jwt::{create_session_token, verify_session_token};
