//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Submission form
//! - `POST /submit`       - Form submission, renders the short link
//! - `GET  /{id}`         - Short link redirect
//! - `GET  /health`       - Health check: database and link cache
//! - `/api/*`             - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler yields a 500 instead of a dropped connection
//! - **Security headers** - `nosniff`, frame and XSS protection headers
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{security_headers, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application routes with all middleware except path
/// normalization.
pub fn router(state: AppState) -> Router {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .with_state(state);

    security_headers::apply(router)
        .layer(CatchPanicLayer::new())
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
