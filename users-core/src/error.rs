//! Error types for the users API client.
//!
//! # Design
//! `NotFound` and `Unauthorized` get dedicated variants because they are the
//! two expected failure outcomes of the API (unknown ID on update, wrong
//! token on delete). All other non-2xx responses land in `HttpError` with the
//! raw status code and body for debugging.

use std::fmt;

/// Errors returned by `UserClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested user does not exist.
    NotFound,

    /// The server returned 401 — the deletion token was rejected.
    Unauthorized,

    /// The server returned an unexpected non-2xx status.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "user not found"),
            ApiError::Unauthorized => write!(f, "token rejected"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
