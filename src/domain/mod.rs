//! Domain layer containing business entities and logic.
//!
//! Nothing in here knows about HTTP or SQL. Persistence is reached only
//! through the [`repositories::LinkRepository`] trait, implemented by the
//! infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`store`] - In-memory link cache backed by a repository
//! - [`error`] - Store failure kinds
//!
//! # Submission Flow
//!
//! 1. HTTP handler receives a long URL
//! 2. [`crate::utils::url_validator::validate_url`] normalizes it
//! 3. [`store::LinkStore::insert_unique`] draws identifiers until one is free,
//!    persists the pair and caches it, all under the store's write lock
//! 4. Lookups are served from the cache through [`store::LinkStore::get`]

pub mod entities;
pub mod error;
pub mod repositories;
pub mod store;
