//! Application layer services implementing business logic.
//!
//! Services combine validation, identifier generation and the link store
//! behind a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
