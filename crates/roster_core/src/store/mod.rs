//! Backing-store abstraction for user records.
//!
//! # Responsibility
//! - Define the capability contract every user store must provide.
//! - Keep raw record shapes decoupled from domain entities.
//!
//! # Invariants
//! - Record ids are expected unique; `upsert` enforces this procedurally.
//! - Lookup misses and absent-id deletes are not errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;

pub use memory::{MemoryStore, USERS_TABLE};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Raw structural shape held by a store.
///
/// Deliberately a twin of the domain entity rather than a reuse of it, so
/// store implementations have no dependency on `model`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRecord {
    /// Record identity; uniqueness is maintained by `upsert`.
    pub id: i64,
    /// Display name as persisted.
    pub name: String,
}

/// Store-layer error for backing collections.
///
/// `MemoryStore` never fails its trait operations; the variants exist so a
/// substituted backend (file, network, database) can report failures through
/// the same contract.
#[derive(Debug)]
pub enum StoreError {
    /// The named table is not known to this store.
    TableNotFound { table: String },
    /// Transport or backend failure from a non-memory implementation.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableNotFound { table } => write!(f, "table not found: `{table}`"),
            Self::Backend(message) => write!(f, "store backend failure: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Capability contract for user-record persistence.
///
/// The canonical implementation is [`MemoryStore`]; a real backend can
/// substitute without touching repository or service code.
pub trait UserStore {
    /// Returns the first record matching `id`, or `None` on a miss.
    fn lookup(&self, id: i64) -> StoreResult<Option<StoreRecord>>;
    /// Returns a snapshot of all records in insertion order.
    fn list_all(&self) -> StoreResult<Vec<StoreRecord>>;
    /// Overwrites the name of the record with the same id, or appends.
    fn upsert(&mut self, record: StoreRecord) -> StoreResult<()>;
    /// Removes every record matching `id`; absent ids are a no-op.
    fn delete_by_id(&mut self, id: i64) -> StoreResult<()>;
}
