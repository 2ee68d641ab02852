//! End-to-end checks that subcommand options are read from their
//! `SAFE_ROUTE_CMDS_<COMMAND>_*` environment variables.

use std::path::Path;
use std::process::{Command, Output};

use rstest::{fixture, rstest};
use safe_route_core::RouteRequest;
use tempfile::TempDir;

/// Empty working and home directories so no stray config file or
/// `SAFE_ROUTE_*` variable from the caller leaks into a run.
#[fixture]
fn sandbox() -> TempDir {
    TempDir::new().expect("tempdir")
}

fn safe_route(sandbox: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_safe-route"))
        .args(args)
        .env_clear()
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox)
        .envs(env.iter().copied())
        .current_dir(sandbox)
        .output()
        .expect("safe-route should launch")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[rstest]
fn select_reads_the_request_path_from_the_environment(sandbox: TempDir) {
    let request_path = sandbox.path().join("journey.json");
    let payload = serde_json::json!({
        "origin": {"lat": 0.0, "lng": 0.0},
        "destination": {"lat": 0.0, "lng": 1.0},
        "candidates": [{"id": "B", "location": {"lat": 0.0, "lng": 0.5}}],
    });
    std::fs::write(&request_path, payload.to_string()).expect("write request");
    let path = request_path.to_str().expect("utf-8 path");

    let output = safe_route(
        sandbox.path(),
        &["select"],
        &[
            ("SAFE_ROUTE_CMDS_SELECT_REQUEST_PATH", path),
            ("SAFE_ROUTE_CMDS_SELECT_MAX_WAYPOINTS", "1"),
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let request: RouteRequest =
        serde_json::from_slice(&output.stdout).expect("stdout should be a route request");
    assert_eq!(request.waypoints.len(), 1);
}

#[rstest]
fn spots_reads_the_search_area_from_the_environment(sandbox: TempDir) {
    // A zero radius fails validation after the coordinates resolve, so no
    // backend is contacted.
    let output = safe_route(
        sandbox.path(),
        &["spots"],
        &[
            ("SAFE_ROUTE_CMDS_SPOTS_LAT", "51.5"),
            ("SAFE_ROUTE_CMDS_SPOTS_LNG", "-0.1"),
            ("SAFE_ROUTE_CMDS_SPOTS_RADIUS_KM", "0"),
        ],
    );

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("radius must be positive"), "stderr: {message}");
    assert!(!message.contains("missing"), "stderr: {message}");
}

#[rstest]
fn route_reads_endpoints_and_backend_from_the_environment(sandbox: TempDir) {
    let output = safe_route(
        sandbox.path(),
        &["route"],
        &[
            ("SAFE_ROUTE_CMDS_ROUTE_FROM_LAT", "51.5"),
            ("SAFE_ROUTE_CMDS_ROUTE_FROM_LNG", "-0.1"),
            ("SAFE_ROUTE_CMDS_ROUTE_TO_LAT", "51.52"),
            ("SAFE_ROUTE_CMDS_ROUTE_TO_LNG", "-0.08"),
            ("SAFE_ROUTE_CMDS_ROUTE_BACKEND_URL", "http://127.0.0.1:9"),
        ],
    );

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(message.contains("127.0.0.1:9"), "stderr: {message}");
    assert!(!message.contains("missing"), "stderr: {message}");
}

#[rstest]
fn variables_are_scoped_to_their_subcommand(sandbox: TempDir) {
    let output = safe_route(
        sandbox.path(),
        &["route"],
        &[
            ("SAFE_ROUTE_CMDS_SPOTS_LAT", "51.5"),
            ("SAFE_ROUTE_CMDS_SPOTS_LNG", "-0.1"),
        ],
    );

    assert!(!output.status.success());
    let message = stderr(&output);
    assert!(
        message.contains("missing from-lat (set --from-lat or SAFE_ROUTE_CMDS_ROUTE_FROM_LAT)"),
        "stderr: {message}"
    );
}
