//! HTTP middleware for request processing.
//!
//! Provides observability and response hardening middleware.

pub mod security_headers;
pub mod tracing;
