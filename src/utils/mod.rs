//! Utility functions for identifier generation, URL validation and database
//! error classification.
//!
//! - [`code_generator`] - Random short identifier generation
//! - [`url_validator`] - User input validation and normalization
//! - [`db_error`] - SQLx error inspection

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
