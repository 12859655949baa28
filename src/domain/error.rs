//! Failure kinds reported by the link store and its repositories.

/// Boxed error produced by a persistence backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while reading or writing links.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The identifier is already mapped to a URL.
    #[error("Identifier already exists: {0}")]
    Conflict(String),

    /// The backing storage is unavailable or rejected the write.
    #[error("Persistence failure: {0}")]
    Persistence(#[source] BoxError),

    /// Every candidate identifier drawn was already taken.
    #[error("No free identifier found after {attempts} attempts")]
    Exhausted { attempts: usize },
}

impl StoreError {
    /// Wraps a backend error as [`StoreError::Persistence`].
    pub fn persistence(err: impl Into<BoxError>) -> Self {
        Self::Persistence(err.into())
    }
}
