//! OSRM routing adapter.
//!
//! This module provides [`OsrmRoutePlanner`], an implementation of
//! [`safe_route_core::RoutePlanner`] backed by an OSRM instance.
//!
//! # Architecture
//!
//! A [`safe_route_core::RouteRequest`] with no waypoints is sent to the OSRM
//! Route service. A request with waypoints has `optimize` set and is sent to
//! the Trip service instead, pinned to start at the origin and finish at the
//! destination. The synchronous trait is implemented by blocking on async
//! HTTP calls internally.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use safe_route_core::{RoutePlanner, RouteRequest, TravelMode, Waypoint, point};
//! use safe_route_data::HttpClientConfig;
//! use safe_route_data::routing::OsrmRoutePlanner;
//!
//! let config = HttpClientConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(10));
//! let planner = OsrmRoutePlanner::with_config(config)?;
//!
//! let request = RouteRequest::new(
//!     point(51.5, -0.1),
//!     point(51.52, -0.08),
//!     vec![Waypoint::stopover(point(51.51, -0.09))],
//! )
//! .with_travel_mode(TravelMode::Walking);
//! let route = planner.plan_route(&request)?;
//! println!("{} points, {:?}", route.geometry.len(), route.duration);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod planner;

#[doc(hidden)]
pub mod test_support;

pub use planner::{DEFAULT_OSRM_URL, OsrmRoutePlanner, osrm_profile};
