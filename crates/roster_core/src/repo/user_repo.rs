//! User repository contract and store-backed implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over raw store records.
//! - Translate between `StoreRecord` rows and `User` entities.
//!
//! # Invariants
//! - `save` applies the configured `IdPolicy` before any store mutation.
//! - Read paths preserve store ordering and map fields losslessly.

use crate::model::user::{User, UserId};
use crate::store::{StoreError, StoreRecord, UserStore};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level error for user persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// A negative id reached the persistence boundary under `RejectNegative`.
    NegativeId(UserId),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeId(_) => write!(f, "the user id must not be negative"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NegativeId(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Named id-validation policy applied by `save`.
///
/// Collapses the historical guarded/unguarded repository variants into one
/// configurable component instead of silently divergent implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Reject negative ids before any store mutation.
    #[default]
    RejectNegative,
    /// Accept any id and leave every rule check to the service layer.
    AcceptAny,
}

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    /// Gets one user by id; a miss is `Ok(None)`.
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Lists all users in store order.
    fn find_all(&self) -> RepoResult<Vec<User>>;
    /// Persists one user, inserting or updating by id.
    fn save(&mut self, user: &User) -> RepoResult<()>;
    /// Deletes one user by id; absent ids are a no-op.
    fn delete_by_id(&mut self, id: UserId) -> RepoResult<()>;
}

/// Store-backed user repository.
///
/// Borrows its store for the repository lifetime, so the caller keeps
/// ownership and can inspect the collection after the repository is dropped.
pub struct StoreUserRepository<'s, S: UserStore> {
    store: &'s mut S,
    policy: IdPolicy,
}

impl<'s, S: UserStore> StoreUserRepository<'s, S> {
    /// Constructs a repository with the canonical `RejectNegative` policy.
    pub fn new(store: &'s mut S) -> Self {
        Self::with_policy(store, IdPolicy::default())
    }

    /// Constructs a repository with an explicit id policy.
    pub fn with_policy(store: &'s mut S, policy: IdPolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the active id policy.
    pub fn policy(&self) -> IdPolicy {
        self.policy
    }
}

impl<S: UserStore> UserRepository for StoreUserRepository<'_, S> {
    fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.store.lookup(id)?.map(record_to_user))
    }

    fn find_all(&self) -> RepoResult<Vec<User>> {
        let records = self.store.list_all()?;
        Ok(records.into_iter().map(record_to_user).collect())
    }

    fn save(&mut self, user: &User) -> RepoResult<()> {
        if self.policy == IdPolicy::RejectNegative && user.id() < 0 {
            error!(
                "event=user_save module=repo status=error error_code=negative_id id={}",
                user.id()
            );
            return Err(RepoError::NegativeId(user.id()));
        }

        self.store.upsert(user_to_record(user))?;
        Ok(())
    }

    fn delete_by_id(&mut self, id: UserId) -> RepoResult<()> {
        self.store.delete_by_id(id)?;
        Ok(())
    }
}

fn record_to_user(record: StoreRecord) -> User {
    User::new(record.id, record.name)
}

fn user_to_record(user: &User) -> StoreRecord {
    StoreRecord {
        id: user.id(),
        name: user.name().to_string(),
    }
}
