//! OSRM-backed route planner.

use std::time::Duration;

use geo::Coord;
use log::debug;

use safe_route_core::{PlannedRoute, RoutePlanner, RouteRequest, RoutingError, TravelMode};

use super::osrm::{OsrmRoute, RouteResponse};
use crate::http::{BlockingClient, ClientBuildError, HttpClientConfig, TransportFailure};

/// OSRM base URL used when none is configured.
pub const DEFAULT_OSRM_URL: &str = "http://localhost:5000";

/// Query string shared by both services.
const GEOMETRY_PARAMS: &str = "overview=full&geometries=geojson";

/// Query string pinning the trip's ends while letting OSRM reorder the
/// waypoints between them.
const TRIP_PARAMS: &str = "source=first&destination=last&roundtrip=false";

/// OSRM profile serving `mode`.
///
/// OSRM has no transit profile, so public transport is routed as driving.
#[must_use]
pub const fn osrm_profile(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Walking => "foot",
        TravelMode::PublicTransport | TravelMode::Driving => "driving",
    }
}

/// Plans routes with an OSRM instance.
///
/// Requests with `optimize` unset go to the Route service and keep the
/// waypoint order. Optimised requests go to the Trip service, which may
/// reorder the waypoints but always starts at the origin and ends at the
/// destination.
///
/// # Runtime requirements
///
/// When called from within an existing Tokio runtime, the runtime must be
/// multi-threaded. From a `current_thread` runtime the planner falls back to
/// its own internal runtime, which blocks the caller's runtime.
///
/// # Examples
///
/// ```no_run
/// use safe_route_core::{RoutePlanner, RouteRequest, point};
/// use safe_route_data::routing::OsrmRoutePlanner;
///
/// let planner = OsrmRoutePlanner::new("http://localhost:5000")?;
/// let request = RouteRequest::new(point(51.5, -0.1), point(51.51, -0.09), Vec::new());
/// let route = planner.plan_route(&request)?;
/// println!("{:.2} km", route.distance_km);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct OsrmRoutePlanner {
    http: BlockingClient,
}

impl OsrmRoutePlanner {
    /// Create a planner for the OSRM instance at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuildError`] if the HTTP client or runtime cannot be
    /// built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpClientConfig::new(base_url))
    }

    /// Create a planner with custom connection settings.
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

    /// Build the Route or Trip URL for `request`.
    ///
    /// Coordinates are semicolon-separated `lng,lat` pairs in visiting
    /// order: origin, waypoints, destination.
    fn build_url(&self, request: &RouteRequest) -> String {
        let coords = request
            .stops()
            .map(|stop| format!("{},{}", stop.x, stop.y))
            .collect::<Vec<_>>()
            .join(";");
        let profile = osrm_profile(request.travel_mode);
        if request.optimize() {
            self.http.config.endpoint(&format!(
                "/trip/v1/{profile}/{coords}?{TRIP_PARAMS}&{GEOMETRY_PARAMS}"
            ))
        } else {
            self.http
                .config
                .endpoint(&format!("/route/v1/{profile}/{coords}?{GEOMETRY_PARAMS}"))
        }
    }

    async fn fetch_route_async(&self, url: &str) -> Result<RouteResponse, RoutingError> {
        let response = self
            .http
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| to_routing_error(url, self.http.classify(&err)))?;

        response
            .json::<RouteResponse>()
            .await
            .map_err(|err| RoutingError::Parse {
                message: err.to_string(),
            })
    }
}

fn to_routing_error(endpoint: &str, failure: TransportFailure) -> RoutingError {
    let url = endpoint.to_owned();
    match failure {
        TransportFailure::Timeout { timeout_secs } => RoutingError::Timeout { url, timeout_secs },
        TransportFailure::Http { status, message } => RoutingError::Http {
            url,
            status,
            message,
        },
        TransportFailure::Network { message } => RoutingError::Network { url, message },
    }
}

/// Convert an OSRM response into a [`PlannedRoute`].
///
/// A missing geometry falls back to the requested stops.
fn convert_response(
    request: &RouteRequest,
    response: RouteResponse,
) -> Result<PlannedRoute, RoutingError> {
    if response.is_no_route() {
        return Err(RoutingError::NoRoute);
    }
    if !response.is_ok() {
        return Err(RoutingError::Service {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }
    let best = response.into_best().ok_or(RoutingError::NoRoute)?;
    to_planned_route(request, best)
}

#[expect(
    clippy::float_arithmetic,
    reason = "OSRM reports metres; callers expect kilometres"
)]
fn to_planned_route(request: &RouteRequest, route: OsrmRoute) -> Result<PlannedRoute, RoutingError> {
    if !(route.distance.is_finite() && route.distance >= 0.0) {
        return Err(RoutingError::Parse {
            message: format!("invalid route distance {}", route.distance),
        });
    }
    if !(route.duration.is_finite() && route.duration >= 0.0) {
        return Err(RoutingError::Parse {
            message: format!("invalid route duration {}", route.duration),
        });
    }
    let geometry = route.geometry.map_or_else(
        || request.stops().collect(),
        |line| {
            line.coordinates
                .into_iter()
                .map(|[lng, lat]| Coord { x: lng, y: lat })
                .collect()
        },
    );
    Ok(PlannedRoute {
        geometry,
        distance_km: route.distance / 1000.0,
        duration: Duration::from_secs_f64(route.duration),
    })
}

impl RoutePlanner for OsrmRoutePlanner {
    fn plan_route(&self, request: &RouteRequest) -> Result<PlannedRoute, RoutingError> {
        let url = self.build_url(request);
        debug!(
            "requesting {} route through {} waypoint(s)",
            if request.optimize() { "optimised" } else { "direct" },
            request.waypoints.len()
        );
        let response = self.http.block_on(self.fetch_route_async(&url))?;
        convert_response(request, response)
    }
}
