//! Fetch candidate safe spots around a point.
//!
//! The [`SafeSpotSource`] trait abstracts the backend that stores safe spots.
//! Callers describe the search area with a [`SafeSpotQuery`] and receive the
//! spots found inside it, ready to feed into the waypoint selector.
//!
//! Errors are returned when the query is invalid or the backend fails.

mod error;
mod source;

pub use error::SafeSpotError;
pub use source::{DEFAULT_SEARCH_RADIUS_KM, SafeSpotQuery, SafeSpotSource};
