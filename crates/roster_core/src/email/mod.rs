//! Email helpers for registration fixtures and input checks.
//!
//! # Responsibility
//! - Validate address syntax without touching deliverability.
//! - Generate throwaway addresses for demo and test data.

pub mod generator;
pub mod validator;

pub use generator::generate_email;
pub use validator::is_valid_email;
