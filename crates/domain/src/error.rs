//! Common error types used across the workspace.
//!
//! Each layer converts into [`DashboardError`] via `#[from]`; adapters map
//! wire failures into the `Api`/`Transport`/`Decode` variants themselves
//! since their source errors (e.g. `reqwest::Error`) must not leak into the
//! domain.

/// Validation failures for user-submitted form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The message body is empty. The backend rejects these with a 400, so
    /// the dashboard refuses to send them at all.
    #[error("message must not be empty")]
    EmptyMessage,
    /// The send-time picker value could not be parsed.
    #[error("invalid send time: {0:?}")]
    InvalidSendAt(String),
    /// The retry-limit field held something that is not a number.
    #[error("invalid retry limit: {0:?}")]
    InvalidMaxRetries(String),
}

/// Errors surfaced by dashboard operations.
///
/// The wire variants mirror the failure channels every backend call has:
/// the response said no ([`Api`](Self::Api), body kept verbatim for
/// display), the request never completed ([`Transport`](Self::Transport)),
/// or a 2xx body did not match the contract ([`Decode`](Self::Decode)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// User input failed validation before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Non-2xx response from the backend.
    #[error("backend returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text, possibly empty.
        body: String,
    },
    /// The request itself failed (connection refused, DNS, timeout, …).
    #[error("{0}")]
    Transport(String),
    /// A 2xx response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}
