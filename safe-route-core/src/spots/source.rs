//! Safe-spot query and source trait.

use geo::Coord;

use super::error::SafeSpotError;
use crate::location::latlng;
use crate::{SafeSpot, SpotCategory, is_finite_point};

/// Search radius used when the caller does not pick one, in kilometres.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 2.5;

/// Area to search for safe spots.
///
/// # Examples
/// ```
/// use safe_route_core::{SafeSpotQuery, SpotCategory, point};
///
/// let query = SafeSpotQuery::around(point(51.5, -0.1))
///     .with_radius_km(1.0)
///     .with_category(SpotCategory::Police);
/// assert!(query.validate().is_ok());
/// assert_eq!(query.category, Some(SpotCategory::Police));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SafeSpotQuery {
    /// Centre of the search circle.
    #[serde(with = "latlng")]
    pub center: Coord<f64>,
    /// Radius of the search circle in kilometres.
    pub radius_km: f64,
    /// Restrict results to one category.
    #[serde(default)]
    pub category: Option<SpotCategory>,
}

impl SafeSpotQuery {
    /// Search [`DEFAULT_SEARCH_RADIUS_KM`] around `center` in every category.
    #[must_use]
    pub const fn around(center: Coord<f64>) -> Self {
        Self {
            center,
            radius_km: DEFAULT_SEARCH_RADIUS_KM,
            category: None,
        }
    }

    /// Set the search radius.
    #[must_use]
    pub const fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Restrict the search to `category`.
    #[must_use]
    pub const fn with_category(mut self, category: SpotCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Check that the centre is finite and the radius is a positive,
    /// finite number.
    ///
    /// # Errors
    ///
    /// Returns [`SafeSpotError::InvalidQuery`] describing the first problem.
    pub fn validate(&self) -> Result<(), SafeSpotError> {
        if !is_finite_point(&self.center) {
            return Err(SafeSpotError::InvalidQuery {
                reason: format!(
                    "centre has non-finite coordinates (lat {}, lng {})",
                    self.center.y, self.center.x
                ),
            });
        }
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(SafeSpotError::InvalidQuery {
                reason: format!("radius must be positive, got {} km", self.radius_km),
            });
        }
        Ok(())
    }
}

/// Fetch safe spots within an area.
///
/// Implementations should validate the query with
/// [`SafeSpotQuery::validate`] and drop any record lacking a usable location
/// before returning.
///
/// # Examples
///
/// ```rust
/// use safe_route_core::{SafeSpot, SafeSpotError, SafeSpotQuery, SafeSpotSource, point};
///
/// struct Fixed(Vec<SafeSpot>);
///
/// impl SafeSpotSource for Fixed {
///     fn spots_near(&self, query: &SafeSpotQuery) -> Result<Vec<SafeSpot>, SafeSpotError> {
///         query.validate()?;
///         Ok(self.0.clone())
///     }
/// }
///
/// let source = Fixed(vec![SafeSpot::new("a", point(0.0, 0.01))]);
/// let spots = source.spots_near(&SafeSpotQuery::around(point(0.0, 0.0)))?;
/// assert_eq!(spots.len(), 1);
/// # Ok::<(), SafeSpotError>(())
/// ```
pub trait SafeSpotSource {
    /// Return the spots matching `query`.
    fn spots_near(&self, query: &SafeSpotQuery) -> Result<Vec<SafeSpot>, SafeSpotError>;
}

impl<T: SafeSpotSource + ?Sized> SafeSpotSource for &T {
    fn spots_near(&self, query: &SafeSpotQuery) -> Result<Vec<SafeSpot>, SafeSpotError> {
        (**self).spots_near(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;
    use crate::test_support::MemorySpotSource;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_bad_radius(#[case] radius: f64) {
        let query = SafeSpotQuery::around(point(0.0, 0.0)).with_radius_km(radius);
        assert!(matches!(
            query.validate(),
            Err(SafeSpotError::InvalidQuery { .. })
        ));
    }

    #[rstest]
    fn rejects_non_finite_centre() {
        let query = SafeSpotQuery::around(point(f64::NAN, 0.0));
        assert!(query.validate().is_err());
    }

    #[rstest]
    fn defaults_to_two_and_a_half_kilometres() {
        let query = SafeSpotQuery::around(point(0.0, 0.0));
        assert_eq!(query.radius_km, DEFAULT_SEARCH_RADIUS_KM);
        assert_eq!(query.category, None);
    }

    #[rstest]
    fn memory_source_filters_by_radius_and_category() {
        let source = MemorySpotSource::with_spots([
            SafeSpot::new("near-police", point(0.0, 0.01)).with_categories(["police"]),
            SafeSpot::new("near-bank", point(0.0, 0.02)).with_categories(["bank"]),
            SafeSpot::new("far-police", point(0.0, 1.0)).with_categories(["police"]),
        ]);
        let query = SafeSpotQuery::around(point(0.0, 0.0)).with_category(SpotCategory::Police);
        let spots = source.spots_near(&query).expect("valid query");
        let ids: Vec<&str> = spots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["near-police"]);
    }
}
