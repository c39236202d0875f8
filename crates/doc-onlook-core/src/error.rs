//! Error types for doc-onlook core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while talking to a receiver.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No transport was injected, so no request could be issued.
    #[error("No HTTP transport available")]
    TransportUnavailable,

    /// A callback-style call was made with no tokio runtime to run it on.
    #[error("No async runtime available to run the request")]
    NoRuntime,

    #[error("Request to {address} failed: {source}")]
    Transport {
        address: String,
        #[source]
        source: TransportError,
    },
}

impl DeviceError {
    /// The transport error carried by this failure, if any.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            DeviceError::Transport { source, .. } => Some(source),
            DeviceError::TransportUnavailable | DeviceError::NoRuntime => None,
        }
    }
}

/// Errors reported by a [`Transport`](crate::transport::Transport) implementation.
///
/// The client forwards these untouched; it never retries or reinterprets them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON response: {0}")]
    Decode(String),

    /// Failure reported by the receiver as a JSON value, kept verbatim.
    #[error("receiver error: {0}")]
    Receiver(serde_json::Value),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
