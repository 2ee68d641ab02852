//! Test utilities for route planners.
//!
//! This module provides [`StubRoutePlanner`], a deterministic test double
//! for [`RoutePlanner`] that returns pre-configured responses without making
//! HTTP requests, and records the requests it receives.

use std::sync::Mutex;
use std::time::Duration;

use safe_route_core::{PlannedRoute, RoutePlanner, RouteRequest, RoutingError};

/// Stub `RoutePlanner` for testing.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use safe_route_core::{RoutePlanner, RouteRequest, point};
/// use safe_route_data::routing::test_support::StubRoutePlanner;
///
/// let planner = StubRoutePlanner::with_duration(Duration::from_secs(600));
/// let request = RouteRequest::new(point(0.0, 0.0), point(0.0, 0.01), Vec::new());
///
/// let route = planner.plan_route(&request)?;
/// assert_eq!(route.duration, Duration::from_secs(600));
/// assert_eq!(planner.requests(), vec![request]);
/// # Ok::<(), safe_route_core::RoutingError>(())
/// ```
#[derive(Debug)]
pub struct StubRoutePlanner {
    response: StubResponse,
    requests: Mutex<Vec<RouteRequest>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Duration(Duration),
    Error(RoutingError),
}

impl StubRoutePlanner {
    /// Create a planner answering every request with the straight path
    /// through its stops, zero distance and `duration`.
    #[must_use]
    pub const fn with_duration(duration: Duration) -> Self {
        Self::new(StubResponse::Duration(duration))
    }

    /// Create a planner that fails every request with `error`.
    #[must_use]
    pub const fn with_error(error: RoutingError) -> Self {
        Self::new(StubResponse::Error(error))
    }

    const fn new(response: StubResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RouteRequest> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl RoutePlanner for StubRoutePlanner {
    fn plan_route(&self, request: &RouteRequest) -> Result<PlannedRoute, RoutingError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match &self.response {
            StubResponse::Duration(duration) => Ok(PlannedRoute {
                geometry: request.stops().collect(),
                distance_km: 0.0,
                duration: *duration,
            }),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
