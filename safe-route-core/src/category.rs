//! Place categories the safe-spot backend can filter by.
//!
//! The keys mirror the place types the backend stores for each spot, so a
//! category round-trips through [`SpotCategory::as_str`] and
//! [`str::parse`] unchanged.
//!
//! # Examples
//! ```
//! use safe_route_core::SpotCategory;
//!
//! assert_eq!(SpotCategory::FireStation.as_str(), "fire_station");
//! assert_eq!(SpotCategory::FireStation.label(), "Fire Station");
//! assert_eq!("POLICE".parse::<SpotCategory>(), Ok(SpotCategory::Police));
//! ```

use thiserror::Error;

/// A filterable safe-spot category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotCategory {
    /// Public libraries.
    Library,
    /// Schools of any level not covered below.
    School,
    /// Secondary schools.
    SecondarySchool,
    /// Pre-schools and nurseries.
    Preschool,
    /// Primary schools.
    PrimarySchool,
    /// Universities and colleges.
    University,
    /// Public toilets.
    PublicBathroom,
    /// Cash machines.
    Atm,
    /// Bank branches.
    Bank,
    /// Fire stations.
    FireStation,
    /// Courthouses.
    Courthouse,
    /// Police stations.
    Police,
    /// Post offices.
    PostOffice,
    /// Hospitals.
    Hospital,
    /// Drugstores.
    Drugstore,
    /// Pharmacies.
    Pharmacy,
    /// Doctors' surgeries.
    Doctor,
    /// Child care agencies.
    ChildCareAgency,
    /// Generic points of interest.
    PointOfInterest,
    /// Airports.
    Airport,
    /// Bus stops.
    BusStop,
    /// Health services.
    Health,
    /// Restaurants.
    Restaurant,
}

/// Error returned when parsing an unrecognised category key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown spot category '{0}'")]
pub struct UnknownCategory(pub String);

impl SpotCategory {
    /// Every category, in the order the backend documents them.
    pub const ALL: [Self; 23] = [
        Self::Library,
        Self::School,
        Self::SecondarySchool,
        Self::Preschool,
        Self::PrimarySchool,
        Self::University,
        Self::PublicBathroom,
        Self::Atm,
        Self::Bank,
        Self::FireStation,
        Self::Courthouse,
        Self::Police,
        Self::PostOffice,
        Self::Hospital,
        Self::Drugstore,
        Self::Pharmacy,
        Self::Doctor,
        Self::ChildCareAgency,
        Self::PointOfInterest,
        Self::Airport,
        Self::BusStop,
        Self::Health,
        Self::Restaurant,
    ];

    /// Return the backend key, e.g. `"bus_stop"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::School => "school",
            Self::SecondarySchool => "secondary_school",
            Self::Preschool => "preschool",
            Self::PrimarySchool => "primary_school",
            Self::University => "university",
            Self::PublicBathroom => "public_bathroom",
            Self::Atm => "atm",
            Self::Bank => "bank",
            Self::FireStation => "fire_station",
            Self::Courthouse => "courthouse",
            Self::Police => "police",
            Self::PostOffice => "post_office",
            Self::Hospital => "hospital",
            Self::Drugstore => "drugstore",
            Self::Pharmacy => "pharmacy",
            Self::Doctor => "doctor",
            Self::ChildCareAgency => "child_care_agency",
            Self::PointOfInterest => "point_of_interest",
            Self::Airport => "airport",
            Self::BusStop => "bus_stop",
            Self::Health => "health",
            Self::Restaurant => "restaurant",
        }
    }

    /// Human-readable label: underscores become spaces and each word is
    /// capitalised.
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(capitalise)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl std::fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpotCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(SpotCategory::PostOffice.to_string(), "post_office");
    }

    #[rstest]
    #[case(SpotCategory::Atm, "Atm")]
    #[case(SpotCategory::ChildCareAgency, "Child Care Agency")]
    #[case(SpotCategory::PublicBathroom, "Public Bathroom")]
    fn labels_are_title_case(#[case] category: SpotCategory, #[case] expected: &str) {
        assert_eq!(category.label(), expected);
    }

    #[rstest]
    #[case("bus_stop", SpotCategory::BusStop)]
    #[case("Bus Stop", SpotCategory::BusStop)]
    #[case("fire-station", SpotCategory::FireStation)]
    fn parsing_accepts_keys_and_labels(#[case] raw: &str, #[case] expected: SpotCategory) {
        assert_eq!(SpotCategory::from_str(raw), Ok(expected));
    }

    #[test]
    fn every_category_round_trips() {
        for category in SpotCategory::ALL {
            assert_eq!(category.as_str().parse::<SpotCategory>(), Ok(category));
        }
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = SpotCategory::from_str("casino").expect_err("casino is not a category");
        assert!(err.to_string().contains("unknown spot category"));
    }
}
