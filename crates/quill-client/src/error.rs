//! Client-side error type.

use quill_shared::FieldError;
use thiserror::Error;

/// Failures a view can run into when calling the API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached at all.
    #[error("Network error. Please check if the backend server is running.")]
    Network(#[source] reqwest::Error),

    /// The server rejected the submitted fields.
    #[error("Validation failed: {}", FieldError::join(.0))]
    Validation(Vec<FieldError>),

    #[error("Post not found")]
    NotFound,

    /// Any other non-2xx answer.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx answer whose body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid API url: {0}")]
    Url(#[from] url::ParseError),
}
