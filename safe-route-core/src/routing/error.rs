use thiserror::Error;

/// Errors from [`crate::routing::RoutePlanner::plan_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The routing engine could not be reached.
    #[error("network error requesting {url}: {message}")]
    Network {
        /// Endpoint that was requested.
        url: String,
        /// Underlying transport error.
        message: String,
    },
    /// The routing engine did not answer in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was requested.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The routing engine answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Endpoint that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The routing engine reported a failure in its response body.
    #[error("routing service error {code}: {message}")]
    Service {
        /// Engine-specific status code.
        code: String,
        /// Human-readable detail.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse routing response: {message}")]
    Parse {
        /// Decoder error.
        message: String,
    },
    /// The engine found no route between the requested points.
    #[error("no route found between the requested points")]
    NoRoute,
}
