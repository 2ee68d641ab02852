//! Request and response bodies of the safe-spot backend.
//!
//! Locations arrive as GeoJSON points, so coordinates are ordered
//! `[longitude, latitude]`.

use log::warn;
use serde::{Deserialize, Serialize};

use safe_route_core::{SafeSpot, SafeSpotQuery, point};

/// Body of `POST /api/safespots/near-me` and `/near-me/filter`.
#[derive(Debug, Serialize)]
pub(crate) struct NearMeRequest {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'static str>,
}

impl From<&SafeSpotQuery> for NearMeRequest {
    fn from(query: &SafeSpotQuery) -> Self {
        Self {
            lat: query.center.y,
            lng: query.center.x,
            radius: query.radius_km,
            filter: query.category.map(|category| category.as_str()),
        }
    }
}

/// Envelope returned by the near-me endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct SpotsResponse {
    #[serde(default)]
    pub spots: Vec<SpotRecord>,
}

/// One backend record. Every field is optional so that a single malformed
/// record can be dropped without failing the whole response.
#[derive(Debug, Deserialize)]
pub(crate) struct SpotRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "googleTypes", default)]
    pub google_types: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoJsonPoint>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeoJsonPoint {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Body of `GET /api/safespots/spots/{id}/directions`.
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    pub url: String,
}

impl SpotRecord {
    /// Convert into a [`SafeSpot`], or `None` when the record lacks an id
    /// or a finite `[lng, lat]` pair.
    pub(crate) fn into_spot(self) -> Option<SafeSpot> {
        let Some(id) = self.id.filter(|id| !id.trim().is_empty()) else {
            warn!("dropping safe spot without an id");
            return None;
        };
        let location = match self.location.as_ref().map(|p| p.coordinates.as_slice()) {
            Some(&[lng, lat]) => point(lat, lng),
            other => {
                warn!("dropping safe spot {id}: unusable coordinates {other:?}");
                return None;
            }
        };
        let mut spot = SafeSpot::new(id, location)
            .with_name(self.name.unwrap_or_default())
            .with_address(self.address.unwrap_or_default())
            .with_categories(self.google_types);
        spot.rating = self.rating;
        if spot.is_routable() {
            Some(spot)
        } else {
            warn!("dropping safe spot {}: non-finite coordinates", spot.id);
            None
        }
    }
}

impl SpotsResponse {
    /// Usable spots in backend order.
    pub(crate) fn into_spots(self) -> Vec<SafeSpot> {
        self.spots
            .into_iter()
            .filter_map(SpotRecord::into_spot)
            .collect()
    }
}
