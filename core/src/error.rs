//! Error types for the request sender and the sequence helpers.
//!
//! # Design
//! Every `RequestError` carries a status code so callers always get the
//! `(body, status, error)` triple: failures that happen before a peer answers
//! report a locally chosen sentinel, while a failure while draining the body
//! reports the status the peer actually sent.

use std::io;

use thiserror::Error;

/// Boxed cause returned by a `Transport`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Sentinel status for a request that never reached a peer.
pub const STATUS_NO_RESPONSE: u16 = 500;

/// Sentinel status for a method outside GET, POST and PUT.
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

/// Errors returned by `Requester::send`.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The method is not one of GET, POST or PUT. No request was sent.
    #[error("request method {0:?} is not supported")]
    UnsupportedMethod(String),

    /// The URI could not be parsed. No request was sent.
    #[error("invalid URI {uri:?}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The peer answered but its body could not be read to the end.
    #[error("failed to read response body (HTTP {status}): {source}")]
    BodyRead {
        status: u16,
        #[source]
        source: io::Error,
    },
}

impl RequestError {
    /// Status code reported alongside the error.
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::UnsupportedMethod(_) => STATUS_METHOD_NOT_ALLOWED,
            RequestError::InvalidUri { .. } | RequestError::Transport(_) => STATUS_NO_RESPONSE,
            RequestError::BodyRead { status, .. } => *status,
        }
    }
}

/// Errors returned by the `seq` helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A dynamic value was not an array.
    #[error("expected an array, found {kind}")]
    NotASequence { kind: &'static str },

    /// The index does not address an element.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },
}
