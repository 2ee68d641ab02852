use geo::Coord;

use crate::location::{is_finite_point, latlng};

/// A place considered lower-risk, such as a police station or hospital.
///
/// Only `id` and `location` take part in waypoint selection; the remaining
/// fields are carried through for display.
///
/// # Examples
/// ```
/// use safe_route_core::{SafeSpot, point};
///
/// let spot = SafeSpot::new("spot-1", point(51.5, -0.1))
///     .with_name("Central Library")
///     .with_categories(["library"]);
///
/// assert!(spot.is_routable());
/// assert_eq!(spot.name, "Central Library");
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SafeSpot {
    /// Backend identifier, unique per spot.
    pub id: String,
    /// Geospatial position.
    #[serde(with = "latlng")]
    pub location: Coord<f64>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Place-type keys reported by the backend, most specific first.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Community rating, when the backend has one.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl SafeSpot {
    /// Construct a spot with an identifier and location and no metadata.
    pub fn new(id: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            location,
            name: String::new(),
            address: String::new(),
            categories: Vec::new(),
            rating: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the postal address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the place-type keys.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the community rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Whether the spot can be considered as a waypoint: it needs a
    /// non-blank identifier and finite coordinates.
    #[must_use]
    pub fn is_routable(&self) -> bool {
        !self.id.trim().is_empty() && is_finite_point(&self.location)
    }
}
