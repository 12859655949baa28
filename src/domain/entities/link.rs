//! Link entity representing a shortened URL mapping.

use serde::Serialize;

/// A short identifier and the URL it redirects to.
///
/// Both fields are fixed at creation; links are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}
