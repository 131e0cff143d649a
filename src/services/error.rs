// ============================================================================
// ERROR TAXONOMY - How backend failures surface in the UI
// ============================================================================
// Four classes matter to callers: transient network/backend trouble (toast),
// 401/403 (session clear + redirect, app-wide), 404 (specific "not found"
// copy), and field-level validation maps (inline under the form field).
// ============================================================================

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::HashMap;
use thiserror::Error;

use crate::models::ErrorBody;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// Authentication failure. Every feature surface reacts identically:
    /// clear the session and return to login.
    #[error("{message}")]
    Unauthorized { status: u16, message: String },

    /// The fetched resource does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// Backend returned a structured `{ errors: { field: message } }` map.
    #[error("validation failed")]
    Validation(HashMap<String, String>),

    /// Any other non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// One-line message suitable for a toast/banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Something went wrong. Please try again.".to_string(),
            ApiError::Unauthorized { message, .. } => message.clone(),
            ApiError::NotFound { message } => message.clone(),
            ApiError::Validation(fields) => fields
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| "Please correct the highlighted fields".to_string()),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Decode(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

/// Classify a non-2xx response. Status decides the class; the body (when it
/// parses as one of the known error shapes) supplies the message.
pub fn classify_error(status: u16, status_text: &str, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.error)
        .unwrap_or_else(|| format!("HTTP {}: {}", status, status_text));

    match status {
        401 | 403 => ApiError::Unauthorized { status, message },
        404 => ApiError::NotFound { message },
        _ => {
            if let Some(errors) = parsed.errors.filter(|map| !map.is_empty()) {
                ApiError::Validation(errors)
            } else {
                ApiError::Status { status, message }
            }
        }
    }
}

/// What the login/signup forms surface: a user-facing message, or a
/// per-field error map rendered inline.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("please correct the highlighted fields")]
    Fields(HashMap<String, String>),
}

impl AuthError {
    pub fn message(&self) -> String {
        match self {
            AuthError::Rejected(message) => message.clone(),
            AuthError::Fields(fields) => fields
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| "Please correct the highlighted fields".to_string()),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            AuthError::Fields(fields) => fields.get(name).map(String::as_str),
            AuthError::Rejected(_) => None,
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(fields) => AuthError::Fields(fields),
            other => AuthError::Rejected(other.user_message()),
        }
    }
}
