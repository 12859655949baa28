//! Core domain entities representing the business data model.
//!
//! - [`Link`] - A shortened URL mapping

pub mod link;

pub use link::Link;
