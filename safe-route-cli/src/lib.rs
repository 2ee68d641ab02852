//! Command-line interface for the safe-route engine.
//!
//! `select` runs waypoint selection offline over a JSON request. `spots` and
//! `route` talk to the safe-spot backend and, for `route`, an OSRM instance.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod output;
mod route;
mod select;
mod services;
mod spots;

pub use error::CliError;

use route::{RouteArgs, run_route};
use select::{SelectArgs, run_select};
use spots::{SpotsArgs, run_spots};

pub(crate) const ARG_SELECT_REQUEST: &str = "request";
pub(crate) const ARG_EXCLUSION_RADIUS_KM: &str = "exclusion-radius-km";
pub(crate) const ARG_MAX_WAYPOINTS: &str = "max-waypoints";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_RADIUS_KM: &str = "radius-km";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_BACKEND_URL: &str = "backend-url";
pub(crate) const ARG_FROM_LAT: &str = "from-lat";
pub(crate) const ARG_FROM_LNG: &str = "from-lng";
pub(crate) const ARG_TO_LAT: &str = "to-lat";
pub(crate) const ARG_TO_LNG: &str = "to-lng";
pub(crate) const ARG_TRAVEL_MODE: &str = "travel-mode";
pub(crate) const ARG_OSRM_BASE_URL: &str = "osrm-base-url";

pub(crate) const ENV_SELECT_REQUEST: &str = "SAFE_ROUTE_CMDS_SELECT_REQUEST_PATH";
pub(crate) const ENV_SPOTS_LAT: &str = "SAFE_ROUTE_CMDS_SPOTS_LAT";
pub(crate) const ENV_SPOTS_LNG: &str = "SAFE_ROUTE_CMDS_SPOTS_LNG";
pub(crate) const ENV_ROUTE_FROM_LAT: &str = "SAFE_ROUTE_CMDS_ROUTE_FROM_LAT";
pub(crate) const ENV_ROUTE_FROM_LNG: &str = "SAFE_ROUTE_CMDS_ROUTE_FROM_LNG";
pub(crate) const ENV_ROUTE_TO_LAT: &str = "SAFE_ROUTE_CMDS_ROUTE_TO_LAT";
pub(crate) const ENV_ROUTE_TO_LNG: &str = "SAFE_ROUTE_CMDS_ROUTE_TO_LNG";

/// Run the safe-route CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, when a
/// backend call fails, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version arrive as errors that belong on stdout.
        Err(err) if !err.use_stderr() => {
            err.print().map_err(CliError::WriteOutput)?;
            return Ok(());
        }
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    match cli.command {
        Command::Select(args) => run_select(args),
        Command::Spots(args) => run_spots(args),
        Command::Route(args) => run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "safe-route",
    about = "Plan journeys that detour through nearby safe spots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose waypoints for a journey from a JSON request, offline.
    Select(SelectArgs),
    /// List safe spots near a point.
    Spots(SpotsArgs),
    /// Plan a safe route between two points.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
