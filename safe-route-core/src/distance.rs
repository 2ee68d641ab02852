//! Great-circle distance between coordinates.

use geo::Coord;

/// Mean Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between `a` and `b`, in kilometres.
///
/// Treats the Earth as a sphere of radius [`EARTH_RADIUS_KM`]. The result is
/// symmetric and zero for identical points.
///
/// # Examples
/// ```
/// use safe_route_core::{haversine_km, point};
///
/// let origin = point(0.0, 0.0);
/// let east = point(0.0, 1.0);
/// let km = haversine_km(&origin, &east);
/// assert!((km - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(&origin, &origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(a: &Coord<f64>, b: &Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let half_dlat = (b.y - a.y).to_radians() / 2.0;
    let half_dlng = (b.x - a.x).to_radians() / 2.0;
    let h = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlng.sin().powi(2);
    // Rounding can nudge `h` a hair above one for antipodal points. `clamp`
    // keeps NaN, so non-finite input yields a NaN distance.
    2.0 * EARTH_RADIUS_KM * h.sqrt().clamp(0.0, 1.0).asin()
}
