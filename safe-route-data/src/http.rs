//! Shared HTTP plumbing: client configuration, construction and the
//! sync-over-async bridge.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Default user agent for outgoing requests.
pub const DEFAULT_USER_AGENT: &str = "safe-route/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error raised while building an HTTP-backed client.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Connection settings shared by the HTTP adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Base URL of the service, e.g. `"http://localhost:8080"`.
    pub base_url: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Create a configuration for `base_url` with default timeout and user
    /// agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Join `path` onto the base URL without doubling slashes.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// How a request failed, before mapping into a domain error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransportFailure {
    Timeout { timeout_secs: u64 },
    Http { status: u16, message: String },
    Network { message: String },
}

/// A `reqwest` client paired with the runtime used to drive it from
/// synchronous code.
pub(crate) struct BlockingClient {
    pub(crate) client: Client,
    pub(crate) config: HttpClientConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl BlockingClient {
    pub(crate) fn build(config: HttpClientConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Drive `future` to completion from synchronous code.
    ///
    /// Inside a multi-threaded Tokio runtime the caller's handle is used via
    /// [`tokio::task::block_in_place`]. Otherwise, including inside a
    /// `current_thread` runtime, the client's own runtime is used; in the
    /// latter case the caller's runtime is blocked for the duration.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }

    /// Classify a `reqwest` failure.
    pub(crate) fn classify(&self, error: &reqwest::Error) -> TransportFailure {
        if error.is_timeout() {
            return TransportFailure::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return TransportFailure::Http {
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        TransportFailure::Network {
            message: error.to_string(),
        }
    }
}
