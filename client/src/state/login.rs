//! Login results as the login form sees them.
//!
//! ERROR HANDLING
//! ==============
//! Login never throws to its caller. Transport failures collapse to one
//! generic message; backend rejections are classified by error code and
//! mapped to user-facing copy.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::error::ApiError;

/// Why a login attempt failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidCredentials,
    RoleMismatch,
    AccountDeactivated,
    Network,
    Unavailable,
    Unknown,
}

impl AuthErrorKind {
    /// Classify a failed login call.
    #[must_use]
    pub fn classify(err: &ApiError) -> Self {
        match err {
            ApiError::Network(_) => Self::Network,
            ApiError::Unavailable => Self::Unavailable,
            ApiError::Status(401) => Self::InvalidCredentials,
            ApiError::Rejected { code: Some(code), .. } => Self::from_code(code),
            ApiError::Rejected { code: None, .. } | ApiError::Status(_) | ApiError::Decode(_) => Self::Unknown,
        }
    }

    /// Map a backend error code. Matching is case-insensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "INVALID_CREDENTIALS" => Self::InvalidCredentials,
            "ROLE_MISMATCH" | "WRONG_ROLE" => Self::RoleMismatch,
            "ACCOUNT_DEACTIVATED" | "ACCOUNT_DISABLED" => Self::AccountDeactivated,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid email or password.",
            Self::RoleMismatch => "This account cannot sign in with the selected role.",
            Self::AccountDeactivated => "This account has been deactivated. Contact an administrator.",
            Self::Network => "Unable to reach the server. Please try again.",
            Self::Unavailable => "Sign-in is unavailable in this browser.",
            Self::Unknown => "Login failed. Please try again.",
        }
    }
}

/// Structured login result: success flag plus a message on failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl LoginOutcome {
    #[must_use]
    pub fn succeeded() -> Self {
        Self { success: true, message: None }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }

    /// Failure for a backend error. Unclassified rejections keep the
    /// backend's own message.
    #[must_use]
    pub fn from_api_error(err: &ApiError) -> Self {
        match (AuthErrorKind::classify(err), err) {
            (AuthErrorKind::Unknown, ApiError::Rejected { message, .. }) => Self::failed(message.clone()),
            (kind, _) => Self::failed(kind.user_message()),
        }
    }
}
