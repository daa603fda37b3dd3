use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors produced while serving a translation.
///
/// `Validation` is recoverable by the user (fix the input and resubmit),
/// `Configuration` is only raised while starting up, and `Upstream` covers
/// everything that goes wrong talking to the model provider.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl TranslateError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Short machine-readable kind, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Configuration(_) => "configuration_error",
            Self::Upstream(_) => "upstream_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Upstream(format!("request to model provider timed out: {}", err))
        } else {
            Self::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TranslateError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TranslateError::configuration("x").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            TranslateError::upstream("x").status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = TranslateError::validation("Please enter some text.");
        assert_eq!(err.to_string(), "Please enter some text.");
        assert_eq!(err.kind(), "validation_error");
    }

    #[test]
    fn test_upstream_message_is_prefixed() {
        let err = TranslateError::upstream("connection refused");
        assert_eq!(err.to_string(), "Upstream error: connection refused");
    }
}
