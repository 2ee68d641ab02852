//! Behavioural tests for end-to-end safe-route planning.
//!
//! These tests use [`StubSafeSpotSource`] and [`StubRoutePlanner`] to verify
//! the pipeline without a running backend or OSRM service.

use std::cell::RefCell;
use std::time::Duration;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use safe_route_core::{
    RouteRequest, RoutingError, SafeRoute, SafeRouteError, SafeRoutePlanner, SafeSpot,
    SafeSpotError, TravelMode, point,
};
use safe_route_data::routing::test_support::StubRoutePlanner;
use safe_route_data::spots::test_support::StubSafeSpotSource;

/// Scenario state shared by every step.
#[derive(Debug)]
struct PlanningWorld {
    source: RefCell<Option<StubSafeSpotSource>>,
    router: RefCell<Option<StubRoutePlanner>>,
    requests: RefCell<Vec<RouteRequest>>,
    result: RefCell<Option<Result<SafeRoute, SafeRouteError>>>,
}

#[fixture]
fn world() -> PlanningWorld {
    PlanningWorld {
        source: RefCell::new(None),
        router: RefCell::new(None),
        requests: RefCell::new(Vec::new()),
        result: RefCell::new(None),
    }
}

fn only_request(world: &PlanningWorld) -> RouteRequest {
    let requests = world.requests.borrow();
    match requests.as_slice() {
        [request] => request.clone(),
        other => panic!("expected exactly one routing request, got {other:?}"),
    }
}

// --- Given steps ---

#[given("a backend returning spots near both ends of the journey")]
fn backend_with_spots(world: &PlanningWorld) {
    world
        .source
        .replace(Some(StubSafeSpotSource::with_spots(vec![
            SafeSpot::new("near-start", point(51.502, -0.098)).with_categories(["police"]),
            SafeSpot::new("middle", point(51.51, -0.09)),
            SafeSpot::new("near-end", point(51.518, -0.082)).with_categories(["hospital"]),
        ])));
}

#[given("a backend returning no spots")]
fn backend_without_spots(world: &PlanningWorld) {
    world
        .source
        .replace(Some(StubSafeSpotSource::with_spots(Vec::new())));
}

#[given("a backend that times out")]
fn backend_timeout(world: &PlanningWorld) {
    world
        .source
        .replace(Some(StubSafeSpotSource::with_error(SafeSpotError::Timeout {
            url: "http://example.com/api/safespots/near-me".to_owned(),
            timeout_secs: 30,
        })));
}

#[given("a routing engine answering in {minutes} minutes")]
fn router_answering(world: &PlanningWorld, minutes: u64) {
    world
        .router
        .replace(Some(StubRoutePlanner::with_duration(Duration::from_secs(
            minutes * 60,
        ))));
}

#[given("a routing engine that finds no route")]
fn router_no_route(world: &PlanningWorld) {
    world
        .router
        .replace(Some(StubRoutePlanner::with_error(RoutingError::NoRoute)));
}

// --- When steps ---

#[when("I plan a walking journey")]
fn plan_walking(world: &PlanningWorld) {
    let source = world.source.take().expect("backend must be configured");
    let router = world.router.take().expect("routing engine must be configured");
    let planner = SafeRoutePlanner::new(source, &router);
    let result = planner.plan(point(51.5, -0.1), point(51.52, -0.08), TravelMode::Walking);
    world.requests.replace(router.requests());
    world.result.replace(Some(result));
}

// --- Then steps ---

#[then("the routing engine receives an optimised request")]
fn optimised_request(world: &PlanningWorld) {
    let request = only_request(world);
    assert!(request.optimize());
    assert_eq!(request.travel_mode, TravelMode::Walking);
}

#[then("the routing engine receives a direct request")]
fn direct_request(world: &PlanningWorld) {
    let request = only_request(world);
    assert!(!request.optimize());
    assert!(request.waypoints.is_empty());
}

#[then("the request visits {first} then {second}")]
fn request_order(world: &PlanningWorld, first: String, second: String) {
    let result = world.result.borrow();
    let Some(Ok(plan)) = result.as_ref() else {
        panic!("expected a planned route, got {result:?}");
    };
    assert_eq!(plan.selection.spot_ids(), [first, second]);
    assert_eq!(
        only_request(world).waypoints,
        plan.selection.waypoints().to_vec()
    );
}

#[then("the route takes {minutes} minutes")]
fn route_duration(world: &PlanningWorld, minutes: u64) {
    let result = world.result.borrow();
    let Some(Ok(plan)) = result.as_ref() else {
        panic!("expected a planned route, got {result:?}");
    };
    assert_eq!(plan.route.duration, Duration::from_secs(minutes * 60));
}

#[then("a safe-spot timeout is reported")]
fn timeout_reported(world: &PlanningWorld) {
    let result = world.result.borrow();
    assert!(
        matches!(
            result.as_ref(),
            Some(Err(SafeRouteError::SafeSpots(SafeSpotError::Timeout { .. })))
        ),
        "expected a safe-spot timeout, got {result:?}"
    );
}

#[then("the routing engine is not called")]
fn router_not_called(world: &PlanningWorld) {
    assert!(world.requests.borrow().is_empty());
}

#[then("a no-route error is reported")]
fn no_route_reported(world: &PlanningWorld) {
    let result = world.result.borrow();
    assert!(
        matches!(
            result.as_ref(),
            Some(Err(SafeRouteError::Routing(RoutingError::NoRoute)))
        ),
        "expected a no-route error, got {result:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/safe_route_planning.feature", name = $title)]
        fn $fn_name(world: PlanningWorld) {
            let _ = world;
        }
    };
}

register_scenario!(detouring_via_spots, "detouring via a spot near each end");
register_scenario!(routing_directly, "routing directly when the backend has no spots");
register_scenario!(reporting_backend_timeout, "reporting a backend timeout");
register_scenario!(reporting_unroutable_journey, "reporting an unroutable journey");
