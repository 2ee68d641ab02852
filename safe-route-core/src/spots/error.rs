use thiserror::Error;

/// Errors from [`crate::spots::SafeSpotSource::spots_near`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafeSpotError {
    /// The query failed validation before any request was made.
    #[error("invalid safe-spot query: {reason}")]
    InvalidQuery {
        /// Why the query was rejected.
        reason: String,
    },
    /// The backend could not be reached.
    #[error("network error fetching {url}: {message}")]
    Network {
        /// Endpoint that was requested.
        url: String,
        /// Underlying transport error.
        message: String,
    },
    /// The backend did not answer in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was requested.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The backend answered with a non-success status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Endpoint that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse safe-spot response: {message}")]
    Parse {
        /// Decoder error.
        message: String,
    },
}
