//! In-memory test doubles for the safe-spot source and routing engine.
//!
//! These are used by unit and behaviour tests and by downstream crates that
//! need deterministic collaborators without a backend or OSRM instance.

use std::time::Duration;

use crate::{
    PlannedRoute, RoutePlanner, RouteRequest, RoutingError, SafeSpot, SafeSpotError,
    SafeSpotQuery, SafeSpotSource, TravelMode, haversine_km,
};

/// In-memory [`SafeSpotSource`] performing a linear scan.
///
/// A spot matches when it lies within the query radius of the centre and,
/// if the query names a category, lists that category's key.
#[derive(Default, Debug, Clone)]
pub struct MemorySpotSource {
    spots: Vec<SafeSpot>,
}

impl MemorySpotSource {
    /// Create a source from a collection of spots.
    pub fn with_spots<I>(spots: I) -> Self
    where
        I: IntoIterator<Item = SafeSpot>,
    {
        Self {
            spots: spots.into_iter().collect(),
        }
    }
}

impl SafeSpotSource for MemorySpotSource {
    fn spots_near(&self, query: &SafeSpotQuery) -> Result<Vec<SafeSpot>, SafeSpotError> {
        query.validate()?;
        Ok(self
            .spots
            .iter()
            .filter(|spot| haversine_km(&spot.location, &query.center) <= query.radius_km)
            .filter(|spot| {
                query.category.is_none_or(|category| {
                    spot.categories.iter().any(|key| key == category.as_str())
                })
            })
            .cloned()
            .collect())
    }
}

/// Walking pace assumed by [`StraightLineRoutePlanner`], in km/h.
const WALKING_KMH: f64 = 5.0;
/// Driving pace assumed by [`StraightLineRoutePlanner`], in km/h.
const DRIVING_KMH: f64 = 40.0;
/// Transit pace assumed by [`StraightLineRoutePlanner`], in km/h.
const TRANSIT_KMH: f64 = 20.0;

/// Deterministic [`RoutePlanner`] joining the stops with straight lines.
///
/// Distances are haversine lengths and durations assume a constant pace per
/// travel mode. Waypoints are never reordered.
#[derive(Default, Debug, Copy, Clone)]
pub struct StraightLineRoutePlanner;

impl RoutePlanner for StraightLineRoutePlanner {
    #[expect(
        clippy::float_arithmetic,
        reason = "summing leg lengths and converting pace needs float maths"
    )]
    fn plan_route(&self, request: &RouteRequest) -> Result<PlannedRoute, RoutingError> {
        let geometry: Vec<_> = request.stops().collect();
        let distance_km: f64 = geometry
            .windows(2)
            .filter_map(|leg| match leg {
                [from, to] => Some(haversine_km(from, to)),
                _ => None,
            })
            .sum();
        let pace = match request.travel_mode {
            TravelMode::Walking => WALKING_KMH,
            TravelMode::PublicTransport => TRANSIT_KMH,
            TravelMode::Driving => DRIVING_KMH,
        };
        Ok(PlannedRoute {
            geometry,
            distance_km,
            duration: Duration::from_secs_f64(distance_km / pace * 3600.0),
        })
    }
}

/// [`RoutePlanner`] that always fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingRoutePlanner {
    error: RoutingError,
}

impl FailingRoutePlanner {
    /// Create a planner returning `error` for every request.
    #[must_use]
    pub const fn new(error: RoutingError) -> Self {
        Self { error }
    }
}

impl RoutePlanner for FailingRoutePlanner {
    fn plan_route(&self, _request: &RouteRequest) -> Result<PlannedRoute, RoutingError> {
        Err(self.error.clone())
    }
}
