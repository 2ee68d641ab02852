//! Facade crate for the safe-route engine.
//!
//! This crate re-exports the core domain types and, behind the `http`
//! feature, the backend and OSRM adapters.

#![forbid(unsafe_code)]

pub use safe_route_core::{
    PlannedRoute, RoutePlanner, RouteRequest, RoutingError, SafeRoute, SafeRouteError,
    SafeRoutePlanner, SafeSpot, SafeSpotError, SafeSpotQuery, SafeSpotSource, SelectionError,
    SelectionParams, SpotCategory, TravelMode, Waypoint, WaypointSelection, WaypointSelector,
    point, select_waypoints,
};

#[cfg(feature = "http")]
pub use safe_route_data::{
    ClientBuildError, HttpClientConfig,
    routing::OsrmRoutePlanner,
    spots::{HttpSafeSpotSource, Vote},
};
