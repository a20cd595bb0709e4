//! User use-case service.
//!
//! # Responsibility
//! - Provide stable registration/listing/deletion entry points.
//! - Enforce domain rules before any persistence call.
//!
//! # Invariants
//! - The id rule is checked before the name rule; both run before `save`.
//! - Failed validation leaves the store untouched.
//! - Service APIs never bypass repository persistence contracts.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{RepoError, UserRepository};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain-rule and pass-through errors for user use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Registration requires ids starting at 1.
    NonPositiveId(UserId),
    /// Registration requires a non-blank display name.
    BlankName,
    /// Persistence-layer failure propagated unmodified.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId(_) => write!(f, "the user id must be greater than 0"),
            Self::BlankName => write!(f, "the name must not be empty"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NonPositiveId(_) => None,
            Self::BlankName => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for user registration flows.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a user after applying both domain rules.
    ///
    /// # Contract
    /// - Ids start at 1; zero and negative ids are rejected first.
    /// - Names must contain at least one non-whitespace character.
    /// - On success the user is visible to `list_users` immediately.
    pub fn register_user(&mut self, user: &User) -> ServiceResult<()> {
        if user.id() < 1 {
            error!(
                "event=user_register module=service status=error error_code=non_positive_id id={}",
                user.id()
            );
            return Err(ServiceError::NonPositiveId(user.id()));
        }

        if user.name().trim().is_empty() {
            error!(
                "event=user_register module=service status=error error_code=blank_name id={}",
                user.id()
            );
            return Err(ServiceError::BlankName);
        }

        self.repo.save(user)?;
        info!(
            "event=user_register module=service status=ok id={}",
            user.id()
        );
        Ok(())
    }

    /// Lists users in storage order.
    pub fn list_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.find_all()?)
    }

    /// Deletes a user by id.
    ///
    /// Deleting an id that is not present is a successful no-op, so the call
    /// is idempotent.
    pub fn delete_user(&mut self, id: UserId) -> ServiceResult<()> {
        self.repo.delete_by_id(id)?;
        info!("event=user_delete module=service status=ok id={id}");
        Ok(())
    }
}
