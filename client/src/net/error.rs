//! REST client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every helper in `api` returns `Result<_, ApiError>`. UI code converts
//! errors to display strings at the edge; nothing here panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ApiErrorBody;

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response without a decodable envelope.
    #[error("request failed: {0}")]
    Status(u16),

    /// The backend answered `{success: false}`.
    #[error("{message}")]
    Rejected { code: Option<String>, message: String },

    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside a browser (SSR, native tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from an optional backend error payload.
    #[must_use]
    pub fn rejected(body: Option<&ApiErrorBody>) -> Self {
        let code = body.and_then(ApiErrorBody::code).map(str::to_owned);
        let message = body
            .and_then(ApiErrorBody::message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("request rejected")
            .to_owned();
        Self::Rejected { code, message }
    }

    /// Backend-supplied classification code, when present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True when the backend was never reached.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
