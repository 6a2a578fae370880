use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::DbUser;

pub mod mongodb;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No server answered the liveness ping within the selection timeout.
    #[error("Problem with connecting to database")]
    Unavailable,

    #[error("User with email {email} not found in database")]
    NotFound { email: String },

    #[error("User with email {email} not created. (duplicated)")]
    Conflict { email: String },

    #[error("Query Error: {0}")]
    MongoDB(::mongodb::error::Error),
}

impl StoreError {
    pub fn not_found(email: impl Into<String>) -> Self {
        Self::NotFound {
            email: email.into(),
        }
    }

    pub fn conflict(email: impl Into<String>) -> Self {
        Self::Conflict {
            email: email.into(),
        }
    }
}

#[async_trait]
pub trait Storage: UserStore + Debug + Send + Sync + 'static {
    /// Liveness ping against the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Operations over the user collection. Records are keyed by email.
///
/// Every operation pings the store first, so an unreachable store surfaces
/// as [`StoreError::Unavailable`] before anything is read or written.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All stored users, in no particular order.
    async fn list(&self) -> Result<Vec<DbUser>, StoreError>;

    async fn get(&self, email: &str) -> Result<DbUser, StoreError>;

    /// Replace the whole record whose email equals `user.email`.
    async fn replace(&self, user: DbUser) -> Result<(), StoreError>;

    async fn delete(&self, email: &str) -> Result<(), StoreError>;

    /// Insert a new record, returning it with the store-assigned id.
    ///
    /// Uniqueness of `email` is enforced by the collection's unique index.
    async fn create(&self, user: DbUser) -> Result<DbUser, StoreError>;
}
