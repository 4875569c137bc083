pub mod auth;
pub mod balance;
pub mod contacts;
pub mod portal;
pub mod schedule_requests;
pub mod sessions;
