//! Handler for the JSON link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "id": "aZ3kQ9",
///   "url": "https://example.com/some/page",
///   "short_url": "http://127.0.0.1:8080/aZ3kQ9"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body or URL is invalid
/// - 503 Service Unavailable if no free identifier was found
/// - 500 Internal Server Error if the link could not be stored
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;
    let short_url = state.link_service.short_url(&link.id);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: link.id,
            url: link.url,
            short_url,
        }),
    ))
}
