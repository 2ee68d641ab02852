//! Hand waypoints to an external routing engine.
//!
//! [`RouteRequest`] is what the engine is asked to solve: origin,
//! destination, the selected waypoints and whether the engine may reorder
//! them. [`RoutePlanner`] abstracts the engine itself and answers with a
//! [`PlannedRoute`].

mod error;
mod planner;
mod request;

pub use error::RoutingError;
pub use planner::RoutePlanner;
pub use request::{PlannedRoute, RouteRequest, TravelMode, UnknownTravelMode};
