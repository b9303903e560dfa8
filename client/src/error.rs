//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Validation` mirror the two failure kinds the server
//! reports. Any other unexpected status lands in `HttpError` with the raw
//! status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 with the given message.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The server returned a status other than the expected one, 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
