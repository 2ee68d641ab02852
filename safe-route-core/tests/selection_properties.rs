//! Property-based tests for waypoint selection and the distance primitive.
//!
//! # Invariants tested
//!
//! - **Cap:** at most two waypoints are ever selected.
//! - **No duplicates:** each spot id appears at most once.
//! - **Exclusion:** no selected spot lies within 50 m of either endpoint.
//! - **Idempotence:** identical inputs give identical, order-preserving output.
//! - **Distance:** haversine is symmetric and zero on the diagonal.

use std::collections::HashSet;

use geo::Coord;
use proptest::prelude::*;
use safe_route_core::{
    DEFAULT_EXCLUSION_RADIUS_KM, DEFAULT_MAX_WAYPOINTS, SafeSpot, haversine_km, point,
    select_waypoints,
};

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-80.0_f64..80.0, -179.0_f64..179.0).prop_map(|(lat, lng)| point(lat, lng))
}

/// Coordinates clustered around the journey so exclusion actually triggers.
fn nearby_coord(centre: Coord<f64>) -> impl Strategy<Value = Coord<f64>> {
    (-0.01_f64..0.01, -0.01_f64..0.01).prop_map(move |(dlat, dlng)| {
        point(centre.y + dlat, centre.x + dlng)
    })
}

/// Spots with ids drawn from a small pool so duplicates occur.
fn spots_near(centre: Coord<f64>) -> impl Strategy<Value = Vec<SafeSpot>> {
    prop::collection::vec((0_u8..12, nearby_coord(centre)), 0..20).prop_map(|raw| {
        raw.into_iter()
            .map(|(id, location)| SafeSpot::new(format!("spot-{id}"), location))
            .collect()
    })
}

fn journey() -> impl Strategy<Value = (Coord<f64>, Coord<f64>, Vec<SafeSpot>)> {
    nearby_coord(point(51.5, -0.1)).prop_flat_map(|origin| {
        (
            Just(origin),
            nearby_coord(origin),
            spots_near(origin),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn selection_is_capped_and_unique((origin, destination, spots) in journey()) {
        let selection = select_waypoints(origin, destination, &spots).expect("finite endpoints");
        prop_assert!(selection.len() <= DEFAULT_MAX_WAYPOINTS);
        prop_assert_eq!(selection.len(), selection.spot_ids().len());
        let unique: HashSet<&String> = selection.spot_ids().iter().collect();
        prop_assert_eq!(unique.len(), selection.len());
    }

    #[test]
    fn selected_spots_keep_clear_of_endpoints((origin, destination, spots) in journey()) {
        let selection = select_waypoints(origin, destination, &spots).expect("finite endpoints");
        for waypoint in selection.waypoints() {
            prop_assert!(waypoint.stopover);
            prop_assert!(haversine_km(&waypoint.location, &origin) >= DEFAULT_EXCLUSION_RADIUS_KM);
            prop_assert!(
                haversine_km(&waypoint.location, &destination) >= DEFAULT_EXCLUSION_RADIUS_KM
            );
        }
    }

    #[test]
    fn selection_is_idempotent((origin, destination, spots) in journey()) {
        let first = select_waypoints(origin, destination, &spots).expect("finite endpoints");
        let second = select_waypoints(origin, destination, &spots).expect("finite endpoints");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_candidates_yield_empty_selection(origin in coord_strategy(), destination in coord_strategy()) {
        let selection = select_waypoints(origin, destination, &[]).expect("finite endpoints");
        prop_assert!(selection.is_empty());
    }

    #[test]
    fn haversine_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        let forward = haversine_km(&a, &b);
        let backward = haversine_km(&b, &a);
        prop_assert!((forward - backward).abs() <= 1.0e-9, "{forward} != {backward}");
    }

    #[test]
    fn haversine_is_zero_on_the_diagonal(a in coord_strategy()) {
        prop_assert_eq!(haversine_km(&a, &a), 0.0);
    }
}
