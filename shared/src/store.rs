use crate::types::{UserPatch, UserRecord};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Failure surfaced by the backing store. Handlers convert every variant to
/// a 500 response; nothing here is retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(String),
}

impl StoreError {
    pub fn request(err: impl fmt::Display) -> Self {
        Self::Request(err.to_string())
    }
}

/// The store collaborator contract: per-key get/put/partial-update/delete,
/// each atomic on its own. Kept free of any particular store's expression
/// language — adapters translate [`UserPatch`] into native update syntax.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the record for `email`, if one exists.
    async fn get(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Full overwrite of the record at `record.email`. No existence check:
    /// writing over an existing record replaces it entirely.
    async fn put(&self, record: &UserRecord) -> Result<(), StoreError>;

    /// Apply the set fields of `patch` to the record at `email`, leaving
    /// other attributes untouched.
    async fn update_partial(&self, email: &str, patch: &UserPatch) -> Result<(), StoreError>;

    /// Delete the record at `email`. Idempotent: deleting an absent key
    /// succeeds.
    async fn delete(&self, email: &str) -> Result<(), StoreError>;
}
