//! Errors shared by the hosted service clients.
use thiserror::Error;

/// An error raised while talking to an upstream service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request never produced a usable response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Service {
        /// The HTTP status the service answered with.
        status: reqwest::StatusCode,
        /// The provider's own description of the failure.
        message: String,
    },
}
