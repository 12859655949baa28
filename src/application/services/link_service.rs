//! Link creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::config::Config;
use crate::domain::entities::Link;
use crate::domain::store::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_url;

/// Top-level path segments served by fixed routes. A link stored under one
/// of these could never be redirected to.
const RESERVED_IDS: &[&str] = &["submit", "health"];

/// Tunables for link creation.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Prefix of generated short links, e.g. `https://s.example.com`.
    pub base_url: String,
    /// Length of generated identifiers.
    pub code_length: usize,
    /// Identifier candidates tried before giving up.
    pub max_attempts: usize,
}

impl From<&Config> for LinkSettings {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            code_length: config.code_length,
            max_attempts: config.code_max_attempts,
        }
    }
}

/// Service for creating and resolving shortened links.
pub struct LinkService {
    store: Arc<LinkStore>,
    generator: CodeGenerator,
    settings: LinkSettings,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(store: Arc<LinkStore>, generator: CodeGenerator, settings: LinkSettings) -> Self {
        Self {
            store,
            generator,
            settings,
        }
    }

    /// Shortens a user-supplied URL.
    ///
    /// The input is validated and normalized, then stored under a freshly
    /// generated identifier. Submitting the same URL twice yields two links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is rejected.
    /// Returns [`AppError::Unavailable`] if no free identifier was found.
    /// Returns [`AppError::Internal`] if the link could not be persisted.
    pub async fn shorten(&self, input: &str) -> Result<Link, AppError> {
        let url = validate_url(input)?;

        let length = self.settings.code_length;
        let link = self
            .store
            .insert_unique(
                &url,
                || next_unreserved(|| self.generator.generate(length)),
                self.settings.max_attempts,
            )
            .await?;

        info!(id = %link.id, url = %link.url, "Short link created");
        Ok(link)
    }

    /// Retrieves a link by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier.
    pub async fn resolve(&self, id: &str) -> Result<Link, AppError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Constructs the full short URL for an identifier.
    pub fn short_url(&self, id: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), id)
    }

    /// The underlying link store.
    pub fn store(&self) -> &Arc<LinkStore> {
        &self.store
    }
}

/// Draws from `generate` until the candidate doesn't shadow a fixed route.
fn next_unreserved(mut generate: impl FnMut() -> String) -> String {
    loop {
        let id = generate();
        if !RESERVED_IDS.contains(&id.as_str()) {
            return id;
        }
    }
}
