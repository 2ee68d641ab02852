//! HTTP-backed safe-spot source.

use log::debug;
use reqwest::Response;
use serde::de::DeserializeOwned;

use safe_route_core::{SafeSpot, SafeSpotError, SafeSpotQuery, SafeSpotSource};

use super::wire::{DirectionsResponse, NearMeRequest, SpotsResponse};
use crate::http::{BlockingClient, ClientBuildError, HttpClientConfig, TransportFailure};

/// Backend base URL used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// A community vote on a safe spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// The spot felt safe.
    Up,
    /// The spot did not feel safe.
    Down,
}

impl Vote {
    const fn action(self) -> &'static str {
        match self {
            Self::Up => "upvote",
            Self::Down => "downvote",
        }
    }
}

/// Fetches safe spots from the backend's `/api/safespots` endpoints.
///
/// Implements the synchronous [`SafeSpotSource`] trait by blocking on async
/// HTTP calls.
///
/// # Examples
///
/// ```no_run
/// use safe_route_core::{SafeSpotQuery, SafeSpotSource, SpotCategory, point};
/// use safe_route_data::spots::HttpSafeSpotSource;
///
/// let source = HttpSafeSpotSource::new("http://localhost:8080")?;
/// let query = SafeSpotQuery::around(point(51.5, -0.1)).with_category(SpotCategory::Police);
/// for spot in source.spots_near(&query)? {
///     println!("{} ({})", spot.name, spot.address);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct HttpSafeSpotSource {
    http: BlockingClient,
}

impl HttpSafeSpotSource {
    /// Create a source for the backend at `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the HTTP client or runtime cannot be
    /// built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpClientConfig::new(base_url))
    }

    /// Create a source with custom connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the HTTP client or runtime cannot be
    /// built.
    pub fn with_config(config: HttpClientConfig) -> Result<Self, ClientBuildError> {
        Ok(Self {
            http: BlockingClient::build(config)?,
        })
    }

    /// Record a vote for the spot `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SafeSpotError::InvalidQuery`] for a blank id, otherwise the
    /// transport or HTTP failure.
    pub fn vote(&self, id: &str, vote: Vote) -> Result<(), SafeSpotError> {
        let url = self.spot_url(id, vote.action())?;
        debug!("posting {} for safe spot {id}", vote.action());
        let response = self.http.block_on(self.http.client.post(&url).send());
        self.check(&url, response)?;
        Ok(())
    }

    /// Ask the backend for a navigation link to the spot `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SafeSpotError::InvalidQuery`] for a blank id,
    /// [`SafeSpotError::Parse`] when the body lacks a `url`, otherwise the
    /// transport or HTTP failure.
    pub fn directions_url(&self, id: &str) -> Result<String, SafeSpotError> {
        let url = self.spot_url(id, "directions")?;
        let body: DirectionsResponse = self.fetch_json(&url, self.http.client.get(&url))?;
        Ok(body.url)
    }

    fn near_me_url(&self, query: &SafeSpotQuery) -> String {
        let path = if query.category.is_some() {
            "/api/safespots/near-me/filter"
        } else {
            "/api/safespots/near-me"
        };
        self.http.config.endpoint(path)
    }

    fn spot_url(&self, id: &str, action: &str) -> Result<String, SafeSpotError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(SafeSpotError::InvalidQuery {
                reason: "spot id must not be empty".to_owned(),
            });
        }
        let mut url = url::Url::parse(&self.http.config.endpoint("/api/safespots/spots"))
            .map_err(|err| SafeSpotError::InvalidQuery {
                reason: format!("invalid backend URL '{}': {err}", self.http.config.base_url),
            })?;
        url.path_segments_mut()
            .map_err(|()| SafeSpotError::InvalidQuery {
                reason: format!(
                    "backend URL '{}' cannot take a path",
                    self.http.config.base_url
                ),
            })?
            .push(trimmed)
            .push(action);
        Ok(url.into())
    }

    fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SafeSpotError> {
        self.http.block_on(async {
            let response = self.check(url, request.send().await)?;
            response
                .json::<T>()
                .await
                .map_err(|err| SafeSpotError::Parse {
                    message: err.to_string(),
                })
        })
    }

    fn check(
        &self,
        url: &str,
        response: Result<Response, reqwest::Error>,
    ) -> Result<Response, SafeSpotError> {
        response
            .and_then(Response::error_for_status)
            .map_err(|err| to_spot_error(url, self.http.classify(&err)))
    }
}

fn to_spot_error(endpoint: &str, failure: TransportFailure) -> SafeSpotError {
    let url = endpoint.to_owned();
    match failure {
        TransportFailure::Timeout { timeout_secs } => SafeSpotError::Timeout { url, timeout_secs },
        TransportFailure::Http { status, message } => SafeSpotError::Http {
            url,
            status,
            message,
        },
        TransportFailure::Network { message } => SafeSpotError::Network { url, message },
    }
}

impl SafeSpotSource for HttpSafeSpotSource {
    fn spots_near(&self, query: &SafeSpotQuery) -> Result<Vec<SafeSpot>, SafeSpotError> {
        query.validate()?;
        let url = self.near_me_url(query);
        let request = self
            .http
            .client
            .post(&url)
            .json(&NearMeRequest::from(query));
        let body: SpotsResponse = self.fetch_json(&url, request)?;
        let spots = body.into_spots();
        debug!("backend returned {} usable safe spots", spots.len());
        Ok(spots)
    }
}
