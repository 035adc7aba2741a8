//! Transport error type.

use thiserror::Error;

/// Errors surfaced by a [`Transport`](crate::Transport).
///
/// Any of these fails exactly one request; callers log it and move on.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Network failure or timeout.
    #[error("Request to '{path}' failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Request to '{path}' returned status {status}")]
    Status { path: String, status: u16 },

    /// The response body was not in the expected shape.
    #[error("Unexpected response from '{path}': {message}")]
    Decode { path: String, message: String },
}

impl TransportError {
    /// Path of the request that failed, if the error is tied to one.
    pub fn path(&self) -> Option<&str> {
        match self {
            TransportError::Build(_) => None,
            TransportError::Request { path, .. }
            | TransportError::Status { path, .. }
            | TransportError::Decode { path, .. } => Some(path),
        }
    }
}
