use reqwest::StatusCode;

/// Failure modes of a single metadata fetch.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried internally. The caller decides whether to surface the message,
/// retry, or fall back.
#[derive(Debug, thiserror::Error)]
pub enum RelayInfoError {
    /// The address did not yield a usable URL after scheme translation.
    /// No request was attempted.
    #[error("invalid relay address: {0}")]
    InvalidAddress(#[from] url::ParseError),

    /// Transport-level failure: DNS, TLS, connection refused, timeout.
    #[error("relay request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A response arrived but carried no body to decode.
    #[error("Relay not responding to metadata request")]
    NoData,

    /// The body is present but is not a valid metadata document.
    #[error("invalid metadata document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-2xx response, reported only under
    /// [`FetchOptions::reject_error_status`](crate::FetchOptions).
    #[error("relay returned HTTP {0}")]
    Status(StatusCode),
}
