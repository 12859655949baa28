//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// Only the length is checked here; URL validation happens in the service.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: String,
    pub url: String,
    pub short_url: String,
}
