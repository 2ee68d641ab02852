//! OSRM API response types for the Route and Trip services.
//!
//! Both services answer with the same envelope; Route fills `routes` and Trip
//! fills `trips`. Geometries are requested as GeoJSON, so coordinates are
//! `[longitude, latitude]`.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service> and
//! <http://project-osrm.org/docs/v5.24.0/api/#trip-service>

use serde::Deserialize;

/// OSRM Route or Trip API response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"NoRoute"` - No route found
    /// - `"NoTrips"` - No trip visiting all points found
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Alternatives from the Route service, best first.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,

    /// Trips from the Trip service.
    #[serde(default)]
    pub trips: Vec<OsrmRoute>,
}

/// One route or trip.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Length in metres.
    pub distance: f64,
    /// Travel time in seconds.
    pub duration: f64,
    /// GeoJSON line string, present with `overview=full`.
    pub geometry: Option<LineString>,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct LineString {
    /// `[longitude, latitude]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Check if OSRM reported that no path connects the points.
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        matches!(self.code.as_str(), "NoRoute" | "NoTrips" | "NoSegment")
    }

    /// The best route or trip, whichever service answered.
    #[must_use]
    pub fn into_best(self) -> Option<OsrmRoute> {
        self.routes.into_iter().chain(self.trips).next()
    }
}
