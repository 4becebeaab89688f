//! Failure normalization for backend calls.

use reqwest::StatusCode;
use thiserror::Error;

/// The one message users see for any failed call.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something bad happened; please try again later.";

/// Errors that can occur while calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached us (DNS, connect, TLS, reset, ...).
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-2xx status.
    #[error("Backend returned {status} for {path}: {body}")]
    Status {
        path: String,
        status: StatusCode,
        body: String,
    },

    /// Backend answered 2xx but the body did not match the expected shape.
    #[error("Unexpected response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The call addresses the current user but nobody is logged in.
    #[error("Not logged in: session has no {missing}")]
    NotLoggedIn { missing: &'static str },

    /// Configured base URL cannot take path segments.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ApiError {
    /// Text for notifications. Identical for every failure kind.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }

    /// Error payload as the backend sent it, for the few views that show it.
    ///
    /// JSON string bodies and `{"error": "..."}` objects are unwrapped to
    /// their text; anything else is returned raw.
    pub fn server_detail(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        let detail = match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::String(text)) => text,
            Ok(serde_json::Value::Object(map)) => match map.get("error") {
                Some(serde_json::Value::String(text)) => text.clone(),
                _ => trimmed.to_string(),
            },
            _ => trimmed.to_string(),
        };
        Some(detail)
    }

    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short classification used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
            ApiError::NotLoggedIn { .. } => "not_logged_in",
            ApiError::InvalidBaseUrl(_) => "invalid_base_url",
            ApiError::ClientBuild(_) => "client_build",
        }
    }
}
