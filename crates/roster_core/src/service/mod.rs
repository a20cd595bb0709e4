//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own domain validation so storage layers stay rule-free.

pub mod user_service;
