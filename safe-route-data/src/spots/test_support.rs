//! Test utilities for safe-spot sources.

use safe_route_core::{SafeSpot, SafeSpotError, SafeSpotQuery, SafeSpotSource};

/// Stub `SafeSpotSource` returning a fixed response for every valid query.
///
/// Unlike `safe_route_core::test_support::MemorySpotSource` the stub does not
/// filter by distance or category, so tests can feed the selector spots that
/// a real backend would never return.
///
/// # Example
///
/// ```
/// use safe_route_core::{SafeSpot, SafeSpotQuery, SafeSpotSource, point};
/// use safe_route_data::spots::test_support::StubSafeSpotSource;
///
/// let source = StubSafeSpotSource::with_spots(vec![SafeSpot::new("a", point(10.0, 10.0))]);
/// let spots = source.spots_near(&SafeSpotQuery::around(point(0.0, 0.0)))?;
/// assert_eq!(spots.len(), 1);
/// # Ok::<(), safe_route_core::SafeSpotError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StubSafeSpotSource {
    response: Result<Vec<SafeSpot>, SafeSpotError>,
}

impl StubSafeSpotSource {
    /// Create a source that returns `spots`.
    #[must_use]
    pub const fn with_spots(spots: Vec<SafeSpot>) -> Self {
        Self {
            response: Ok(spots),
        }
    }

    /// Create a source that fails with `error`.
    ///
    /// Invalid queries still fail with [`SafeSpotError::InvalidQuery`].
    #[must_use]
    pub const fn with_error(error: SafeSpotError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl SafeSpotSource for StubSafeSpotSource {
    fn spots_near(&self, query: &SafeSpotQuery) -> Result<Vec<SafeSpot>, SafeSpotError> {
        query.validate()?;
        self.response.clone()
    }
}
