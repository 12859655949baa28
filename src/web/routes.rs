//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, submit_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Submission form routes.
///
/// # Endpoints
///
/// - `GET  /`       - Submission form
/// - `POST /submit` - Shortens the submitted URL and renders the result
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/submit", post(submit_handler))
}
