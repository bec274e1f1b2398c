//! HTTP error handling and automated response generation
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::upstream::errors::UpstreamError;

/// Represents an HTTP error response, optionally with an upstream detail
/// message alongside the short error label.
pub struct HttpError {
    /// The numeric HTTP status code to respond with.
    status: StatusCode,
    /// The short error label included in the response body.
    error: Option<String>,
    /// An optional longer detail message, usually passed through from an
    /// upstream provider.
    message: Option<String>,
}

impl From<StatusCode> for HttpError {
    fn from(status: StatusCode) -> Self {
        Self {
            status,
            error: None,
            message: None,
        }
    }
}

impl HttpError {
    /// Construct a new HTTP error with a given status code and error label.
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Attach a detail message to the error body.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let error = self
            .error
            .unwrap_or_else(|| self.status.canonical_reason().unwrap_or("").to_owned());
        let body = self.message.map_or_else(
            || json!({ "error": error }),
            |message| json!({ "error": error, "message": message }),
        );
        (self.status, Json(body)).into_response()
    }
}

impl From<UpstreamError> for HttpError {
    fn from(err: UpstreamError) -> Self {
        eprintln!("Error raised from upstream service in handler: {err}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            .with_message(err.to_string())
    }
}
