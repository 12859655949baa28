//! Form submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Fields posted by the submission form.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
}

/// Page showing the created short link.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub short_url: String,
    pub long_url: String,
}

/// Page explaining why a submission failed.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: &'static str,
}

/// Shortens the submitted URL and renders the result page.
///
/// # Endpoint
///
/// `POST /submit` (`application/x-www-form-urlencoded`, field `url`)
///
/// # Responses
///
/// - **200 OK** with the short link
/// - **400 Bad Request** if the field is empty or the URL is invalid
/// - **500 Internal Server Error** if the link could not be stored
pub async fn submit_handler(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Response {
    if form.url.trim().is_empty() {
        return error_page(StatusCode::BAD_REQUEST, "Error field is empty");
    }

    match state.link_service.shorten(&form.url).await {
        Ok(link) => ResultTemplate {
            short_url: state.link_service.short_url(&link.id),
            long_url: link.url,
        }
        .into_response(),
        Err(AppError::Validation { .. }) => error_page(StatusCode::BAD_REQUEST, "Invalid URL"),
        Err(err) => {
            error!("Failed to shorten submitted URL: {}", err);
            error_page(StatusCode::INTERNAL_SERVER_ERROR, "Could not create the short link")
        }
    }
}

fn error_page(status: StatusCode, title: &'static str) -> Response {
    (status, ErrorTemplate { title }).into_response()
}
