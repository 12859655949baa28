//! Repository trait for durable link storage.

use crate::domain::entities::Link;
use crate::domain::error::StoreError;
use async_trait::async_trait;

/// Durable storage for links.
///
/// The repository is the source of truth; [`crate::domain::store::LinkStore`]
/// mirrors it in memory and is the only caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - Non-durable, for
///   running without a database and for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns every stored link, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the backend cannot be read.
    async fn fetch_all(&self) -> Result<Vec<Link>, StoreError>;

    /// Stores a new link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the identifier is already stored.
    /// Returns [`StoreError::Persistence`] on any other backend failure.
    async fn insert(&self, link: &Link) -> Result<(), StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> bool;
}
