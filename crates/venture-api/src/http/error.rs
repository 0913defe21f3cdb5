//! Application error type mapping to HTTP status codes.
//!
//! The web surface renders HTML pages, so errors render as a small
//! HTML error page rather than a JSON envelope.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Validation error (bad form input).
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(format!("{e:#}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = format!(
            "<!DOCTYPE html>\n<html>\n<head><title>AI Startup Simulator</title></head>\n\
             <body>\n<h1>Simulation failed</h1>\n<p>{}</p>\n\
             <p><a href=\"/\">Back</a></p>\n</body>\n</html>",
            escape_html(&message)
        );

        (status, Html(body)).into_response()
    }
}

/// Minimal HTML escaping for text interpolated into pages.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
