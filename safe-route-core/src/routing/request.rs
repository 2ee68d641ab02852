//! Route request and response payloads.

use std::time::Duration;

use geo::Coord;
use thiserror::Error;

use crate::Waypoint;
use crate::location::{latlng, latlng_vec};

/// How the traveller intends to move.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// On foot.
    #[default]
    Walking,
    /// Buses, trams and trains.
    PublicTransport,
    /// By car.
    Driving,
}

impl TravelMode {
    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::PublicTransport => "public_transport",
            Self::Driving => "driving",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised travel mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode '{0}'")]
pub struct UnknownTravelMode(pub String);

impl std::str::FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walking" | "walk" | "foot" => Ok(Self::Walking),
            "public_transport" | "public-transport" | "transit" => Ok(Self::PublicTransport),
            "driving" | "drive" | "car" => Ok(Self::Driving),
            _ => Err(UnknownTravelMode(s.to_owned())),
        }
    }
}

/// Request handed to a [`crate::RoutePlanner`].
///
/// # Examples
/// ```
/// use safe_route_core::{RouteRequest, Waypoint, point};
///
/// let direct = RouteRequest::new(point(0.0, 0.0), point(0.0, 1.0), Vec::new());
/// assert!(!direct.optimize());
///
/// let via = RouteRequest::new(
///     point(0.0, 0.0),
///     point(0.0, 1.0),
///     vec![Waypoint::stopover(point(0.0, 0.5))],
/// );
/// assert!(via.optimize());
/// assert_eq!(via.stops().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RouteRequestPayload", into = "RouteRequestPayload")]
pub struct RouteRequest {
    /// Start of the journey.
    pub origin: Coord<f64>,
    /// End of the journey.
    pub destination: Coord<f64>,
    /// Stops to route through, in preferred order.
    pub waypoints: Vec<Waypoint>,
    /// Travel mode for the journey.
    pub travel_mode: TravelMode,
}

impl RouteRequest {
    /// Build a request for the default travel mode.
    #[must_use]
    pub fn new(origin: Coord<f64>, destination: Coord<f64>, waypoints: Vec<Waypoint>) -> Self {
        Self {
            origin,
            destination,
            waypoints,
            travel_mode: TravelMode::default(),
        }
    }

    /// Whether the engine may reorder the waypoints: true exactly when
    /// there are waypoints to reorder.
    #[must_use]
    pub const fn optimize(&self) -> bool {
        !self.waypoints.is_empty()
    }

    /// Set the travel mode.
    #[must_use]
    pub fn with_travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    /// Origin, waypoint locations and destination in visiting order.
    pub fn stops(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        std::iter::once(self.origin)
            .chain(self.waypoints.iter().map(|w| w.location))
            .chain(std::iter::once(self.destination))
    }
}

/// Wire form of [`RouteRequest`]. An incoming `optimize` flag is accepted
/// and ignored; the outgoing one is derived from the waypoints.
#[derive(serde::Serialize, serde::Deserialize)]
struct RouteRequestPayload {
    #[serde(with = "latlng")]
    origin: Coord<f64>,
    #[serde(with = "latlng")]
    destination: Coord<f64>,
    waypoints: Vec<Waypoint>,
    #[serde(default)]
    optimize: bool,
    #[serde(default)]
    travel_mode: TravelMode,
}

impl From<RouteRequestPayload> for RouteRequest {
    fn from(payload: RouteRequestPayload) -> Self {
        Self::new(payload.origin, payload.destination, payload.waypoints)
            .with_travel_mode(payload.travel_mode)
    }
}

impl From<RouteRequest> for RouteRequestPayload {
    fn from(request: RouteRequest) -> Self {
        let optimize = request.optimize();
        Self {
            origin: request.origin,
            destination: request.destination,
            waypoints: request.waypoints,
            optimize,
            travel_mode: request.travel_mode,
        }
    }
}

/// A path computed by a routing engine.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlannedRoute {
    /// Polyline of the path from origin to destination.
    #[serde(with = "latlng_vec")]
    pub geometry: Vec<Coord<f64>>,
    /// Total length in kilometres.
    pub distance_km: f64,
    /// Estimated travel time.
    pub duration: Duration,
}
