//! HTTP adapters for the safe-route engine.
//!
//! [`spots::HttpSafeSpotSource`] queries the safe-spot backend and
//! [`routing::OsrmRoutePlanner`] asks an OSRM instance for routes. Both
//! implement the synchronous traits from `safe-route-core` by blocking on
//! asynchronous `reqwest` calls internally.

#![forbid(unsafe_code)]

mod http;
pub mod routing;
pub mod spots;

pub use http::{ClientBuildError, DEFAULT_USER_AGENT, HttpClientConfig};
