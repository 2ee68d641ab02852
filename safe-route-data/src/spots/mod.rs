//! Safe-spot backend client.
//!
//! [`HttpSafeSpotSource`] implements [`safe_route_core::SafeSpotSource`]
//! against the backend's `/api/safespots` endpoints. Queries without a
//! category go to `near-me`; queries with one go to `near-me/filter` with the
//! category key as the filter. Records lacking an id or a usable GeoJSON
//! point are dropped with a warning before reaching the selector.
//!
//! The client also exposes the backend's feedback endpoints:
//! [`HttpSafeSpotSource::vote`] and [`HttpSafeSpotSource::directions_url`].

mod client;
mod wire;

#[doc(hidden)]
pub mod test_support;

pub use client::{DEFAULT_BACKEND_URL, HttpSafeSpotSource, Vote};
