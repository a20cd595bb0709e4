//! User domain entity.
//!
//! # Responsibility
//! - Define the canonical user shape shared by repository and service layers.
//! - Keep identity stable while allowing display-name updates.
//!
//! # Invariants
//! - `id` is the sole identity and never changes after construction.
//! - The entity itself performs no rule checks; registration-time validation
//!   lives in `UserService`, so a constructed `User` is not necessarily
//!   registrable.

use serde::{Deserialize, Serialize};

/// Stable identifier for every user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

/// Domain entity exposed to callers.
///
/// A bare data carrier: business rules (positive id, non-blank name) are
/// enforced at registration time, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    /// Creates a user value without applying any domain rule.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the stable identity.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name, keeping identity unchanged.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
