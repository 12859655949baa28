//! In-memory link cache mirrored from a durable repository.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::domain::entities::Link;
use crate::domain::error::StoreError;
use crate::domain::repositories::LinkRepository;

/// Identifier-to-link mapping served from memory and persisted through a
/// [`LinkRepository`].
///
/// Lookups take the read lock and never touch the repository. Writes take the
/// write lock and hold it until the row is committed, so a link becomes
/// visible to readers only once it is durable. A failed write leaves the
/// cache unchanged.
pub struct LinkStore {
    repository: Arc<dyn LinkRepository>,
    cache: RwLock<HashMap<String, Link>>,
}

impl LinkStore {
    /// Creates an empty store over `repository`.
    ///
    /// Call [`Self::load_all`] before serving traffic.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            repository,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Populates the cache with every link held by the repository.
    ///
    /// Returns the number of cached links afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if the repository cannot be read.
    pub async fn load_all(&self) -> Result<usize, StoreError> {
        let links = self.repository.fetch_all().await?;

        let mut cache = self.cache.write().await;
        for link in links {
            cache.insert(link.id.clone(), link);
        }

        Ok(cache.len())
    }

    /// Looks up a link by identifier.
    pub async fn get(&self, id: &str) -> Option<Link> {
        self.cache.read().await.get(id).cloned()
    }

    /// Inserts a link under a caller-chosen identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if `id` is already taken.
    /// Returns [`StoreError::Persistence`] if the repository write fails.
    pub async fn put(&self, id: &str, url: &str) -> Result<(), StoreError> {
        let mut cache = self.cache.write().await;

        if cache.contains_key(id) {
            return Err(StoreError::Conflict(id.to_string()));
        }

        self.commit(&mut cache, Link::new(id, url)).await?;
        Ok(())
    }

    /// Stores `url` under the first free identifier produced by `next_id`.
    ///
    /// Generation, the uniqueness check and the insert all run under a single
    /// write lock, so two concurrent calls can never settle on the same
    /// identifier. A conflict reported by the repository (a row written by
    /// another process) counts as a taken identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Exhausted`] if `max_attempts` candidates were all taken.
    /// Returns [`StoreError::Persistence`] if the repository write fails.
    pub async fn insert_unique<F>(
        &self,
        url: &str,
        mut next_id: F,
        max_attempts: usize,
    ) -> Result<Link, StoreError>
    where
        F: FnMut() -> String + Send,
    {
        let mut cache = self.cache.write().await;

        for attempt in 1..=max_attempts {
            let id = next_id();

            if cache.contains_key(&id) {
                debug!(%id, attempt, "Identifier collision in cache");
                continue;
            }

            match self.commit(&mut cache, Link::new(id, url)).await {
                Ok(link) => return Ok(link),
                Err(StoreError::Conflict(id)) => {
                    debug!(%id, attempt, "Identifier collision in repository");
                }
                Err(err) => return Err(err),
            }
        }

        Err(StoreError::Exhausted {
            attempts: max_attempts,
        })
    }

    /// Number of cached links.
    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Returns true if no links are cached.
    pub async fn is_empty(&self) -> bool {
        self.cache.read().await.is_empty()
    }

    /// Checks that the backing repository is reachable.
    pub async fn ping(&self) -> bool {
        self.repository.ping().await
    }

    /// Persists `link`, then caches it. The caller must hold the write lock.
    async fn commit(
        &self,
        cache: &mut HashMap<String, Link>,
        link: Link,
    ) -> Result<Link, StoreError> {
        if let Err(err) = self.repository.insert(&link).await {
            if !matches!(err, StoreError::Conflict(_)) {
                error!(id = %link.id, "Failed to persist link: {}", err);
            }
            return Err(err);
        }

        cache.insert(link.id.clone(), link.clone());
        Ok(link)
    }
}
