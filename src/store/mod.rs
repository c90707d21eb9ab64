use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[cfg(test)]
pub mod memory;
mod models;
mod pg;

pub use models::{Item, NewItem, NewUser, User};
pub use pg::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persisted user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    /// Fails with [`StoreError::DuplicateEmail`] when the email is taken, even if
    /// a concurrent insert won the race after the caller's own lookup.
    async fn create(&self, user: NewUser<'_>) -> Result<User, StoreError>;
}

/// Persisted item postings. Listings are newest first.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError>;
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, StoreError>;
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Item>, StoreError>;
}
