//! Waypoints handed to a routing engine.

use geo::Coord;

use crate::location::latlng;

/// An intermediate stop supplied to a routing engine to bias the path.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    /// Position of the stop.
    #[serde(with = "latlng")]
    pub location: Coord<f64>,
    /// Whether the route must visit the stop rather than merely pass near it.
    pub stopover: bool,
}

impl Waypoint {
    /// A waypoint the route must visit.
    #[must_use]
    pub const fn stopover(location: Coord<f64>) -> Self {
        Self {
            location,
            stopover: true,
        }
    }
}

/// Ordered waypoints chosen by the selector.
///
/// Origin-side picks precede destination-side picks. `spot_ids` holds the
/// identifier of the spot behind each waypoint, index for index.
///
/// # Examples
/// ```
/// use safe_route_core::{WaypointSelection, point};
///
/// let selection = WaypointSelection::default();
/// assert!(selection.is_empty());
/// assert_eq!(selection.len(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaypointSelection {
    waypoints: Vec<Waypoint>,
    spot_ids: Vec<String>,
}

impl WaypointSelection {
    pub(crate) fn push(&mut self, id: &str, location: Coord<f64>) {
        self.waypoints.push(Waypoint::stopover(location));
        self.spot_ids.push(id.to_owned());
    }

    /// Waypoints in selection order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Identifiers of the selected spots in selection order.
    #[must_use]
    pub fn spot_ids(&self) -> &[String] {
        &self.spot_ids
    }

    /// Number of selected waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// `true` when no waypoint was selected, meaning "route directly".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Consume the selection, returning only the waypoints.
    #[must_use]
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}
