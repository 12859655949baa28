//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::error::StoreError;
use crate::domain::repositories::LinkRepository;

/// Repository that keeps links in process memory.
///
/// Used when no database is configured and in tests. Contents are lost when
/// the process exits. `fetch_all` returns links ordered by identifier.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: RwLock<BTreeMap<String, String>>,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn fetch_all(&self) -> Result<Vec<Link>, StoreError> {
        Ok(self
            .links
            .read()
            .await
            .iter()
            .map(|(id, url)| Link::new(id.as_str(), url.as_str()))
            .collect())
    }

    async fn insert(&self, link: &Link) -> Result<(), StoreError> {
        let mut links = self.links.write().await;

        if links.contains_key(&link.id) {
            return Err(StoreError::Conflict(link.id.clone()));
        }

        links.insert(link.id.clone(), link.url.clone());
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}
