//! Focused unit tests covering the spots command.

use super::helpers::{StubServiceBuilder, journey_spots};
use super::*;
use crate::spots::{SpotsArgs, SpotsConfig, config_from_layers_for_test, run_spots_with};
use ortho_config::MergeComposer;
use rstest::{fixture, rstest};
use safe_route_core::{SafeSpot, SafeSpotError, SpotCategory, point};
use serde_json::json;

#[fixture]
fn args() -> SpotsArgs {
    SpotsArgs {
        lat: Some(51.5),
        lng: Some(-0.1),
        ..SpotsArgs::default()
    }
}

#[rstest]
#[case(None, Some(-0.1), ARG_LAT, ENV_SPOTS_LAT)]
#[case(Some(51.5), None, ARG_LNG, ENV_SPOTS_LNG)]
fn converting_without_coordinates_errors(
    #[case] lat: Option<f64>,
    #[case] lng: Option<f64>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let err = SpotsConfig::try_from(SpotsArgs {
        lat,
        lng,
        ..SpotsArgs::default()
    })
    .expect_err("missing coordinate should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn config_applies_defaults(args: SpotsArgs) {
    let config = SpotsConfig::try_from(args).expect("config should build");
    assert_eq!(config.query.center, point(51.5, -0.1));
    assert_eq!(config.query.radius_km, 2.5);
    assert_eq!(config.query.category, None);
    assert_eq!(config.backend_url, "http://localhost:8080");
}

#[rstest]
fn non_positive_radius_is_rejected(args: SpotsArgs) {
    let err = SpotsConfig::try_from(SpotsArgs {
        radius_km: Some(0.0),
        ..args
    })
    .expect_err("zero radius");
    assert!(
        matches!(err, CliError::SafeSpots(SafeSpotError::InvalidQuery { .. })),
        "unexpected error {err:?}"
    );
}

#[rstest]
fn clap_accepts_negative_longitudes_and_spaced_categories() {
    let cli = Cli::try_parse_from([
        "safe-route",
        "spots",
        "--lat",
        "51.5",
        "--lng",
        "-0.1",
        "--category",
        "fire station",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Spots(parsed) => {
            assert_eq!(parsed.lng, Some(-0.1));
            assert_eq!(parsed.category, Some(SpotCategory::FireStation));
        }
        other => panic!("expected spots command, found {other:?}"),
    }
}

#[rstest]
fn clap_rejects_unknown_categories() {
    let err = Cli::try_parse_from([
        "safe-route",
        "spots",
        "--lat",
        "0",
        "--lng",
        "0",
        "--category",
        "casino",
    ])
    .expect_err("unknown category");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn run_spots_prints_matching_spots(args: SpotsArgs) {
    let builder = StubServiceBuilder::with_spots(journey_spots());
    let mut stdout = Vec::new();
    run_spots_with(
        SpotsArgs {
            category: Some(SpotCategory::Police),
            backend_url: Some("http://backend.test".to_owned()),
            ..args
        },
        &builder,
        &mut stdout,
    )
    .expect("spots should succeed");

    let spots: Vec<SafeSpot> = serde_json::from_slice(&stdout).expect("output is JSON");
    let ids: Vec<_> = spots.iter().map(|spot| spot.id.as_str()).collect();
    assert_eq!(ids, ["near-start"]);
    assert_eq!(*builder.backend_urls.borrow(), ["http://backend.test"]);
}

#[rstest]
fn run_spots_propagates_backend_failures(args: SpotsArgs) {
    let builder = StubServiceBuilder::failing(SafeSpotError::Http {
        url: "http://localhost:8080/api/safespots/near-me".to_owned(),
        status: 503,
        message: "unavailable".to_owned(),
    });
    let mut stdout = Vec::new();
    let err = run_spots_with(args, &builder, &mut stdout).expect_err("backend failure");
    assert!(
        matches!(err, CliError::SafeSpots(SafeSpotError::Http { status: 503, .. })),
        "unexpected error {err:?}"
    );
    assert!(stdout.is_empty());
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "lat": 10.0,
            "lng": 20.0,
            "backend_url": "http://from-file:8080",
            "category": "library",
        }),
        None,
    );
    composer.push_environment(json!({ "lat": 51.5 }));
    composer.push_cli(json!({ "radius_km": 1.0 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.query.center, point(51.5, 20.0));
    assert_eq!(config.query.radius_km, 1.0);
    assert_eq!(config.query.category, Some(SpotCategory::Library));
    assert_eq!(config.backend_url, "http://from-file:8080");
}
