//! Host process errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Startup failures. Any of these ends the process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// The outbound HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),

    /// The Leptos site configuration is missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind listener: {0}")]
    Bind(std::io::Error),

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

/// A forwarded `/api` call that never produced a backend response.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend response body failed: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    /// Shaped like a backend failure envelope so the client shows its
    /// network-failure message.
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": false, "error": "backend unavailable" });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}
