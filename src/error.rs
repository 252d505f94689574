//! Error taxonomy for content API operations.
//!
//! Three classes matter to callers:
//! - transport failures ([`ContentError::Transport`], [`ContentError::Status`]):
//!   the request never produced a usable response; render a generic error or
//!   keep showing stale content
//! - not-found ([`ContentError::NotFound`]): the server answered and the
//!   article does not exist; render an explicit empty state
//! - validation ([`ContentError::Validation`]): malformed local input that
//!   never reached the network
//!
//! A well-formed response with zero items is an ordinary `Ok` value, never an
//! error. No operation retries; a single failure surfaces immediately.

use reqwest::StatusCode;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Failure of a content API operation.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Network-level failure: DNS, connect, TLS, or a dropped connection.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status}")]
    Status { status: StatusCode },

    /// The body did not conform to the `ApiResponse` envelope.
    #[error("malformed response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// A well-formed envelope reported `success: false` on an endpoint
    /// where that has no dedicated meaning.
    #[error("content API reported failure: {message}")]
    Api { message: String },

    /// Article lookup miss, from either a failure envelope or HTTP 404.
    #[error("article not found: {slug}")]
    NotFound { slug: String },

    /// Locally-rejected input; nothing was sent over the wire.
    #[error("invalid input: {reason}")]
    Validation { reason: String },
}

impl ContentError {
    /// True for failures of the request/response cycle itself, the cases a
    /// caller should present as a generic "could not load" error.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ContentError::Transport(_) | ContentError::Status { .. }
        )
    }

    /// True when the server answered and the requested article does not
    /// exist, the case a caller should present as an empty state.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}
