//! Route-planner trait.

use super::error::RoutingError;
use super::request::{PlannedRoute, RouteRequest};

/// Compute a travel path for a [`RouteRequest`].
///
/// The engine must visit every waypoint flagged as a stopover. When
/// `request.optimize()` is set it may reorder the waypoints, but the origin
/// stays first and the destination last.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use safe_route_core::{
///     PlannedRoute, RoutePlanner, RouteRequest, RoutingError, TravelMode, point,
/// };
///
/// struct Direct;
///
/// impl RoutePlanner for Direct {
///     fn plan_route(&self, request: &RouteRequest) -> Result<PlannedRoute, RoutingError> {
///         Ok(PlannedRoute {
///             geometry: request.stops().collect(),
///             distance_km: 1.0,
///             duration: Duration::from_secs(60),
///         })
///     }
/// }
///
/// let request = RouteRequest::new(point(0.0, 0.0), point(0.0, 0.01), Vec::new());
/// let route = Direct.plan_route(&request)?;
/// assert_eq!(route.geometry.len(), 2);
/// # Ok::<(), RoutingError>(())
/// ```
pub trait RoutePlanner {
    /// Plan a route for `request`.
    fn plan_route(&self, request: &RouteRequest) -> Result<PlannedRoute, RoutingError>;
}

impl<T: RoutePlanner + ?Sized> RoutePlanner for &T {
    fn plan_route(&self, request: &RouteRequest) -> Result<PlannedRoute, RoutingError> {
        (**self).plan_route(request)
    }
}
