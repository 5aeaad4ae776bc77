//! Error type shared by the client and the typed response helpers.
//!
//! HTTP status codes are never errors here: a 403 from the service is a
//! regular [`ApiResponse`](crate::ApiResponse). Only failures that prevent a
//! request from being made or a body from being interpreted end up in
//! [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that may occur when talking to the PetFriends API.
#[derive(Debug, Error)]
pub enum Error {
    /// An HTTP request error occurred (connection, TLS, client build).
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A credential could not be encoded as an HTTP header value.
    #[error("invalid value for header '{name}': {source}")]
    InvalidHeader {
        /// Name of the offending header.
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// The pet photo could not be read from disk.
    #[error("failed to read photo {}: {source}", path.display())]
    Photo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON body did not match the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Typed decoding was requested on a body that was not JSON.
    #[error("expected a JSON body, got text: {0}")]
    UnexpectedBody(String),
}
