//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::error::StoreError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_primary_key_violation;

/// Row shape of the `links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    url: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.url)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn fetch_all(&self) -> Result<Vec<Link>, StoreError> {
        let rows = sqlx::query_as::<_, LinkRow>("SELECT id, url FROM links")
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(StoreError::persistence)?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn insert(&self, link: &Link) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO links (id, url) VALUES ($1, $2)")
            .bind(&link.id)
            .bind(&link.url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_primary_key_violation(&e) {
                    StoreError::Conflict(link.id.clone())
                } else {
                    StoreError::persistence(e)
                }
            })?;

        Ok(())
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
