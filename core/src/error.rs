//! Error types for the customer API client.
//!
//! # Design
//! Every non-2xx response lands in the single `RequestFailed` variant. The
//! UI treats all failures the same way (one generic banner), so the client
//! does not parse error bodies or distinguish 404 from 500. The remaining
//! variants cover JSON conversion on either side of the wire.

use std::fmt;

/// Errors returned by `CustomerClient` build and parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    RequestFailed { status: u16 },

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { status } => {
                write!(f, "request failed: HTTP {status}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
