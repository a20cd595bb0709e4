//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate record/entity translation from service/business orchestration.
//!
//! # Invariants
//! - Repository writes apply the configured `IdPolicy` before persistence.
//! - Repository APIs return semantic errors in addition to store transport
//!   errors.

pub mod user_repo;
