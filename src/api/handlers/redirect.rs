//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its stored URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Lookups are served from the in-memory link cache and never hit the
/// database.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&id).await?;
    debug!(%id, url = %link.url, "Redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, link.url)]))
}
