//! In-memory user store.
//!
//! # Responsibility
//! - Provide the canonical single-owner `UserStore` implementation.
//! - Seed the fixed startup roster used by local flows and tests.
//!
//! # Invariants
//! - Records keep insertion order; `upsert` never reorders.
//! - Reads return owned snapshots; later mutation is invisible through them.

use super::{StoreError, StoreRecord, StoreResult, UserStore};
use log::info;

/// Name of the single table this store models.
pub const USERS_TABLE: &str = "users";

/// Vec-backed user store with a fixed seed roster.
#[derive(Debug)]
pub struct MemoryStore {
    records: Vec<StoreRecord>,
}

impl MemoryStore {
    /// Creates a store seeded with the canonical startup roster.
    pub fn new() -> Self {
        let records = vec![
            StoreRecord {
                id: 1,
                name: "Carlos".to_string(),
            },
            StoreRecord {
                id: 2,
                name: "Ana".to_string(),
            },
        ];
        info!(
            "event=store_seed module=store status=ok table={} records={}",
            USERS_TABLE,
            records.len()
        );
        Self { records }
    }

    /// Creates an empty store for tests and custom seeding.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the record snapshot for a named table.
    ///
    /// Only the `users` table exists in this store; any other name is a
    /// typed failure instead of a silent empty result.
    pub fn fetch_table(&self, table: &str) -> StoreResult<Vec<StoreRecord>> {
        if table != USERS_TABLE {
            return Err(StoreError::TableNotFound {
                table: table.to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryStore {
    fn lookup(&self, id: i64) -> StoreResult<Option<StoreRecord>> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }

    fn list_all(&self) -> StoreResult<Vec<StoreRecord>> {
        Ok(self.records.clone())
    }

    fn upsert(&mut self, record: StoreRecord) -> StoreResult<()> {
        if let Some(existing) = self.records.iter_mut().find(|row| row.id == record.id) {
            existing.name = record.name;
            return Ok(());
        }
        self.records.push(record);
        Ok(())
    }

    fn delete_by_id(&mut self, id: i64) -> StoreResult<()> {
        self.records.retain(|record| record.id != id);
        Ok(())
    }
}
