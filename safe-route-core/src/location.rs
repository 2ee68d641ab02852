//! Helpers for WGS84 coordinates.
//!
//! Coordinates travel through the engine as [`Coord<f64>`] with
//! `x = longitude` and `y = latitude`. Callers, payloads and the safe-spot
//! backend speak in `lat`/`lng` pairs instead, so this module provides the
//! conversions plus `serde` adapters that encode a coordinate as
//! `{"lat": .., "lng": ..}`.

use geo::Coord;

/// Build a coordinate from latitude and longitude in degrees.
///
/// # Examples
/// ```
/// use safe_route_core::point;
///
/// let london = point(51.5, -0.12);
/// assert_eq!(london.y, 51.5);
/// assert_eq!(london.x, -0.12);
/// ```
#[must_use]
pub const fn point(lat: f64, lng: f64) -> Coord<f64> {
    Coord { x: lng, y: lat }
}

/// Return `true` when both components of `coord` are finite numbers.
///
/// # Examples
/// ```
/// use safe_route_core::{is_finite_point, point};
///
/// assert!(is_finite_point(&point(0.0, 0.0)));
/// assert!(!is_finite_point(&point(f64::NAN, 0.0)));
/// ```
#[must_use]
pub fn is_finite_point(coord: &Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

#[derive(serde::Serialize, serde::Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<&Coord<f64>> for LatLng {
    fn from(coord: &Coord<f64>) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        point(value.lat, value.lng)
    }
}

/// `serde` adapter encoding a single coordinate as `{"lat", "lng"}`.
///
/// Use with `#[serde(with = "safe_route_core::location::latlng")]`.
pub mod latlng {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::LatLng;

    /// Serialize `coord` as a `lat`/`lng` object.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        LatLng::from(coord).serialize(serializer)
    }

    /// Deserialize a `lat`/`lng` object into a coordinate.
    ///
    /// # Errors
    ///
    /// Fails when either field is missing or not a number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Coord<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        LatLng::deserialize(deserializer).map(Coord::from)
    }
}

/// `serde` adapter encoding a list of coordinates as `lat`/`lng` objects.
pub mod latlng_vec {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serializer, ser::SerializeSeq};

    use super::LatLng;

    /// Serialize `coords` as a sequence of `lat`/`lng` objects.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(coords: &[Coord<f64>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(coords.len()))?;
        for coord in coords {
            seq.serialize_element(&LatLng::from(coord))?;
        }
        seq.end()
    }

    /// Deserialize a sequence of `lat`/`lng` objects.
    ///
    /// # Errors
    ///
    /// Fails when any element is malformed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Coord<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<LatLng>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(Coord::from).collect())
    }
}
