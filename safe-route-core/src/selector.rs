//! Safe-spot waypoint selection.
//!
//! Given an origin, a destination and candidate [`SafeSpot`]s, the selector
//! picks up to [`DEFAULT_MAX_WAYPOINTS`] stops: the spot nearest the start of
//! the journey first, then the spot nearest its end that was not already
//! chosen. With a larger cap, half the slots (rounded up) come from the
//! origin side and the destination side fills the rest. Spots within
//! [`DEFAULT_EXCLUSION_RADIUS_KM`] of either endpoint are ignored, since a
//! detour to them distorts the route without making it safer.
//!
//! The selector is pure: it performs no I/O, keeps no state between calls
//! and never mutates its inputs.

use std::collections::HashSet;

use geo::Coord;
use log::debug;
use thiserror::Error;

use crate::{SafeSpot, WaypointSelection, haversine_km, is_finite_point};

/// Candidates closer than this to either endpoint are excluded (50 m).
pub const DEFAULT_EXCLUSION_RADIUS_KM: f64 = 0.05;

/// Upper bound on the number of waypoints returned.
pub const DEFAULT_MAX_WAYPOINTS: usize = 2;

/// Which endpoint of a journey an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Start of the journey.
    Origin,
    /// End of the journey.
    Destination,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        })
    }
}

/// Errors returned by [`WaypointSelector::select`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SelectionError {
    /// The origin or destination has a non-finite coordinate.
    #[error("{endpoint} has non-finite coordinates (lat {lat}, lng {lng})")]
    InvalidEndpoint {
        /// Offending endpoint.
        endpoint: Endpoint,
        /// Latitude as supplied.
        lat: f64,
        /// Longitude as supplied.
        lng: f64,
    },
}

/// Errors returned by [`SelectionParams::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SelectionParamsError {
    /// The exclusion radius was negative or not finite.
    #[error("exclusion radius must be a finite, non-negative number of kilometres, got {0}")]
    InvalidExclusionRadius(f64),
    /// The waypoint cap was zero.
    #[error("waypoint cap must be at least one")]
    ZeroWaypointCap,
}

/// Tunable knobs of the selection heuristic.
///
/// # Examples
/// ```
/// use safe_route_core::SelectionParams;
///
/// let params = SelectionParams::default();
/// assert_eq!(params.max_waypoints(), 2);
/// assert_eq!(params.exclusion_radius_km(), 0.05);
///
/// assert!(SelectionParams::new(-1.0, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionParams {
    exclusion_radius_km: f64,
    max_waypoints: usize,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            exclusion_radius_km: DEFAULT_EXCLUSION_RADIUS_KM,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }
}

impl SelectionParams {
    /// Validate and construct selection parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionParamsError`] when the radius is negative or not
    /// finite, or when `max_waypoints` is zero.
    pub fn new(
        exclusion_radius_km: f64,
        max_waypoints: usize,
    ) -> Result<Self, SelectionParamsError> {
        if !exclusion_radius_km.is_finite() || exclusion_radius_km < 0.0 {
            return Err(SelectionParamsError::InvalidExclusionRadius(
                exclusion_radius_km,
            ));
        }
        if max_waypoints == 0 {
            return Err(SelectionParamsError::ZeroWaypointCap);
        }
        Ok(Self {
            exclusion_radius_km,
            max_waypoints,
        })
    }

    /// Minimum distance, in kilometres, a candidate must keep from both
    /// endpoints.
    #[must_use]
    pub const fn exclusion_radius_km(&self) -> f64 {
        self.exclusion_radius_km
    }

    /// Maximum number of waypoints selected.
    #[must_use]
    pub const fn max_waypoints(&self) -> usize {
        self.max_waypoints
    }

    /// Slots filled from the origin-side ranking before the destination-side
    /// ranking takes over: half the cap, rounded up.
    #[must_use]
    pub const fn origin_quota(&self) -> usize {
        self.max_waypoints.div_ceil(2)
    }
}

/// A candidate that survived filtering, with its distances to both ends.
struct Ranked<'a> {
    spot: &'a SafeSpot,
    to_origin: f64,
    to_destination: f64,
}

/// Picks safe-spot waypoints for a journey.
///
/// `WaypointSelector` is `Copy` and stateless apart from its parameters, so
/// it can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaypointSelector {
    params: SelectionParams,
}

impl WaypointSelector {
    /// Create a selector with explicit parameters.
    #[must_use]
    pub const fn new(params: SelectionParams) -> Self {
        Self { params }
    }

    /// Parameters in use.
    #[must_use]
    pub const fn params(&self) -> SelectionParams {
        self.params
    }

    /// Select waypoints between `origin` and `destination`.
    ///
    /// Candidates with a blank id or non-finite coordinates are skipped.
    /// An empty selection means the caller should route directly.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidEndpoint`] when `origin` or
    /// `destination` is not finite.
    pub fn select(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
        candidates: &[SafeSpot],
    ) -> Result<WaypointSelection, SelectionError> {
        validate_endpoints(origin, destination)?;

        let survivors = self.rank(origin, destination, candidates);

        let mut by_origin: Vec<&Ranked<'_>> = survivors.iter().collect();
        // `sort_by` is stable, so input order breaks ties.
        by_origin.sort_by(|a, b| a.to_origin.total_cmp(&b.to_origin));
        let mut by_destination: Vec<&Ranked<'_>> = survivors.iter().collect();
        by_destination.sort_by(|a, b| a.to_destination.total_cmp(&b.to_destination));

        let cap = self.params.max_waypoints;
        let mut seen: HashSet<&str> = HashSet::with_capacity(cap);
        let mut selection = WaypointSelection::default();
        take_unseen(&mut selection, &mut seen, &by_origin, self.params.origin_quota());
        take_unseen(&mut selection, &mut seen, &by_destination, cap);

        debug!(
            "selected {} of {} candidate spots ({} within reach)",
            selection.len(),
            candidates.len(),
            survivors.len()
        );
        Ok(selection)
    }

    fn rank<'a>(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
        candidates: &'a [SafeSpot],
    ) -> Vec<Ranked<'a>> {
        let radius = self.params.exclusion_radius_km;
        candidates
            .iter()
            .filter(|spot| {
                let routable = spot.is_routable();
                if !routable {
                    debug!("skipping malformed safe spot {:?}", spot.id);
                }
                routable
            })
            .map(|spot| Ranked {
                spot,
                to_origin: haversine_km(&spot.location, &origin),
                to_destination: haversine_km(&spot.location, &destination),
            })
            .filter(|ranked| ranked.to_origin >= radius && ranked.to_destination >= radius)
            .collect()
    }
}

/// Append unseen candidates from `ranking` until `selection` holds `limit`.
fn take_unseen<'a>(
    selection: &mut WaypointSelection,
    seen: &mut HashSet<&'a str>,
    ranking: &[&Ranked<'a>],
    limit: usize,
) {
    for candidate in ranking {
        if selection.len() >= limit {
            break;
        }
        if seen.insert(candidate.spot.id.as_str()) {
            selection.push(&candidate.spot.id, candidate.spot.location);
        }
    }
}

/// Check that both journey endpoints have finite coordinates.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidEndpoint`] naming the first endpoint,
/// origin before destination, that is not finite.
pub fn validate_endpoints(
    origin: Coord<f64>,
    destination: Coord<f64>,
) -> Result<(), SelectionError> {
    check_endpoint(Endpoint::Origin, &origin)?;
    check_endpoint(Endpoint::Destination, &destination)
}

fn check_endpoint(endpoint: Endpoint, coord: &Coord<f64>) -> Result<(), SelectionError> {
    if is_finite_point(coord) {
        Ok(())
    } else {
        Err(SelectionError::InvalidEndpoint {
            endpoint,
            lat: coord.y,
            lng: coord.x,
        })
    }
}

/// Select waypoints with the default parameters.
///
/// # Errors
///
/// Returns [`SelectionError::InvalidEndpoint`] when `origin` or
/// `destination` is not finite.
///
/// # Examples
/// ```
/// use safe_route_core::{SafeSpot, point, select_waypoints};
///
/// let origin = point(0.0, 0.0);
/// let destination = point(0.0, 1.0);
/// let candidates = vec![
///     SafeSpot::new("a", point(0.0, 0.0001)),
///     SafeSpot::new("b", point(0.0, 0.5)),
///     SafeSpot::new("c", point(0.0, 0.99999)),
/// ];
///
/// let selection = select_waypoints(origin, destination, &candidates)?;
/// assert_eq!(selection.spot_ids(), ["b"]);
/// # Ok::<(), safe_route_core::SelectionError>(())
/// ```
pub fn select_waypoints(
    origin: Coord<f64>,
    destination: Coord<f64>,
    candidates: &[SafeSpot],
) -> Result<WaypointSelection, SelectionError> {
    WaypointSelector::default().select(origin, destination, candidates)
}
