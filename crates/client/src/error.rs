//! Repository client error model.

use thiserror::Error;

/// Result type for all repository calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Error returned by a repository call.
///
/// The store surfaces these as plain strings on the affected state slice;
/// it never propagates them to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The transport failed (timeout, connection refused, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the request.
    #[error("{0}")]
    Api(String),

    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
}

impl ClientError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }
}
