//! End-to-end safe-route planning.
//!
//! [`SafeRoutePlanner`] runs the whole journey pipeline: fetch safe spots
//! around the origin, select waypoints among them, and ask the routing
//! engine for a path through those waypoints.

use geo::Coord;
use log::{debug, info};
use thiserror::Error;

use crate::{
    PlannedRoute, RoutePlanner, RouteRequest, RoutingError, SafeSpotError, SafeSpotQuery,
    SafeSpotSource, SelectionError, TravelMode, WaypointSelection, WaypointSelector,
    validate_endpoints,
};

/// Errors returned by [`SafeRoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SafeRouteError {
    /// The origin or destination was unusable.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Fetching safe spots failed.
    #[error("failed to fetch safe spots: {0}")]
    SafeSpots(#[from] SafeSpotError),
    /// The routing engine failed.
    #[error("failed to plan route: {0}")]
    Routing(#[from] RoutingError),
}

/// A planned route together with the safe spots it passes through.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SafeRoute {
    /// Request handed to the routing engine.
    pub request: RouteRequest,
    /// Waypoints chosen and the spots behind them.
    pub selection: WaypointSelection,
    /// Path returned by the routing engine.
    pub route: PlannedRoute,
}

/// Plans journeys that detour through nearby safe spots.
///
/// # Examples
/// ```
/// use safe_route_core::test_support::{MemorySpotSource, StraightLineRoutePlanner};
/// use safe_route_core::{SafeRoutePlanner, SafeSpot, TravelMode, point};
///
/// let spots = MemorySpotSource::with_spots([SafeSpot::new("library", point(0.0, 0.005))]);
/// let planner = SafeRoutePlanner::new(spots, StraightLineRoutePlanner);
///
/// let plan = planner.plan(point(0.0, 0.0), point(0.0, 0.01), TravelMode::Walking)?;
/// assert_eq!(plan.selection.spot_ids(), ["library"]);
/// assert!(plan.request.optimize());
/// # Ok::<(), safe_route_core::SafeRouteError>(())
/// ```
#[derive(Debug)]
pub struct SafeRoutePlanner<S, R> {
    spots: S,
    router: R,
    selector: WaypointSelector,
    search_radius_km: Option<f64>,
}

impl<S, R> SafeRoutePlanner<S, R>
where
    S: SafeSpotSource,
    R: RoutePlanner,
{
    /// Create a planner using the default selector and search radius.
    pub fn new(spots: S, router: R) -> Self {
        Self {
            spots,
            router,
            selector: WaypointSelector::default(),
            search_radius_km: None,
        }
    }

    /// Use a custom waypoint selector.
    #[must_use]
    pub fn with_selector(mut self, selector: WaypointSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Search for safe spots within `radius_km` of the origin.
    #[must_use]
    pub fn with_search_radius_km(mut self, radius_km: f64) -> Self {
        self.search_radius_km = Some(radius_km);
        self
    }

    /// Plan a journey from `origin` to `destination`.
    ///
    /// When no safe spot qualifies the route goes direct and the request is
    /// sent without optimisation.
    ///
    /// # Errors
    ///
    /// Returns [`SafeRouteError::Selection`] for non-finite endpoints,
    /// before any network traffic; otherwise propagates failures of the
    /// spot source or routing engine.
    pub fn plan(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
        travel_mode: TravelMode,
    ) -> Result<SafeRoute, SafeRouteError> {
        // Reject bad endpoints before touching the network.
        validate_endpoints(origin, destination)?;

        let query = self.query_for(origin);
        let candidates = self.spots.spots_near(&query)?;
        debug!(
            "fetched {} safe spots within {} km of origin",
            candidates.len(),
            query.radius_km
        );

        let selection = self.selector.select(origin, destination, &candidates)?;
        let request = RouteRequest::new(origin, destination, selection.waypoints().to_vec())
            .with_travel_mode(travel_mode);
        let route = self.router.plan_route(&request)?;
        info!(
            "planned {travel_mode} route via {} safe spot(s): {:.2} km, {}s",
            selection.len(),
            route.distance_km,
            route.duration.as_secs()
        );
        Ok(SafeRoute {
            request,
            selection,
            route,
        })
    }

    fn query_for(&self, origin: Coord<f64>) -> SafeSpotQuery {
        let query = SafeSpotQuery::around(origin);
        match self.search_radius_km {
            Some(radius) => query.with_radius_km(radius),
            None => query,
        }
    }
}
