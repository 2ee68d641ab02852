//! Core domain types for the safe-route engine.
//!
//! The crate owns the waypoint-selection heuristic that biases a journey
//! through nearby safe spots, together with the contracts of the two
//! collaborators around it: a [`SafeSpotSource`] that supplies candidate
//! spots and a [`RoutePlanner`] that turns origin, destination and waypoints
//! into a drivable path. [`SafeRoutePlanner`] wires the three together.
//!
//! Coordinates are WGS84 [`geo::Coord`] values with `x = longitude` and
//! `y = latitude`.

#![forbid(unsafe_code)]

mod category;
mod distance;
pub mod location;
mod planner;
pub mod routing;
mod selector;
mod spot;
pub mod spots;
mod waypoint;

#[doc(hidden)]
pub mod test_support;

pub use category::{SpotCategory, UnknownCategory};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use location::{is_finite_point, point};
pub use planner::{SafeRoute, SafeRouteError, SafeRoutePlanner};
pub use routing::{
    PlannedRoute, RouteRequest, RoutePlanner, RoutingError, TravelMode, UnknownTravelMode,
};
pub use selector::{
    DEFAULT_EXCLUSION_RADIUS_KM, DEFAULT_MAX_WAYPOINTS, Endpoint, SelectionError, SelectionParams,
    SelectionParamsError, WaypointSelector, select_waypoints, validate_endpoints,
};
pub use spot::SafeSpot;
pub use spots::{DEFAULT_SEARCH_RADIUS_KM, SafeSpotError, SafeSpotQuery, SafeSpotSource};
pub use waypoint::{Waypoint, WaypointSelection};
