//! Route command implementation for the safe-route CLI.

use std::io::Write;

use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use safe_route_core::{
    DEFAULT_SEARCH_RADIUS_KM, SafeRoute, SafeRoutePlanner, SelectionParams, TravelMode,
    WaypointSelector, point,
};
use safe_route_data::routing::DEFAULT_OSRM_URL;
use safe_route_data::spots::DEFAULT_BACKEND_URL;
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::select::selection_params;
use crate::services::{HttpServiceBuilder, ServiceBuilder};
use crate::{
    ARG_BACKEND_URL, ARG_EXCLUSION_RADIUS_KM, ARG_FROM_LAT, ARG_FROM_LNG, ARG_MAX_WAYPOINTS,
    ARG_OSRM_BASE_URL, ARG_RADIUS_KM, ARG_TO_LAT, ARG_TO_LNG, ARG_TRAVEL_MODE, CliError,
    ENV_ROUTE_FROM_LAT, ENV_ROUTE_FROM_LNG, ENV_ROUTE_TO_LAT, ENV_ROUTE_TO_LNG,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Fetch safe spots around the origin from the backend, pick \
                 up to two of them as waypoints (one near each end of the \
                 journey), and ask an OSRM instance for a route through \
                 them. Prints the planned route as JSON.",
    about = "Plan a safe route between two points",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "SAFE_ROUTE")]
pub(crate) struct RouteArgs {
    /// Latitude of the journey start in degrees.
    #[arg(long = ARG_FROM_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) from_lat: Option<f64>,
    /// Longitude of the journey start in degrees.
    #[arg(long = ARG_FROM_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) from_lng: Option<f64>,
    /// Latitude of the journey end in degrees.
    #[arg(long = ARG_TO_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) to_lat: Option<f64>,
    /// Longitude of the journey end in degrees.
    #[arg(long = ARG_TO_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) to_lng: Option<f64>,
    /// Radius around the origin to search for safe spots, in kilometres.
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// How the traveller moves: walking, public_transport or driving.
    #[arg(long = ARG_TRAVEL_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) travel_mode: Option<TravelMode>,
    /// Minimum distance in kilometres between a waypoint and either endpoint.
    #[arg(long = ARG_EXCLUSION_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) exclusion_radius_km: Option<f64>,
    /// Maximum number of waypoints to select.
    #[arg(long = ARG_MAX_WAYPOINTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_waypoints: Option<usize>,
    /// Base URL of the safe-spot backend (e.g. "http://localhost:8080").
    #[arg(long = ARG_BACKEND_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) backend_url: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) origin: Coord<f64>,
    pub(crate) destination: Coord<f64>,
    pub(crate) search_radius_km: f64,
    pub(crate) travel_mode: TravelMode,
    pub(crate) params: SelectionParams,
    pub(crate) backend_url: String,
    pub(crate) osrm_base_url: String,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let from_lat = args.from_lat.ok_or(CliError::MissingArgument {
            field: ARG_FROM_LAT,
            env: ENV_ROUTE_FROM_LAT,
        })?;
        let from_lng = args.from_lng.ok_or(CliError::MissingArgument {
            field: ARG_FROM_LNG,
            env: ENV_ROUTE_FROM_LNG,
        })?;
        let to_lat = args.to_lat.ok_or(CliError::MissingArgument {
            field: ARG_TO_LAT,
            env: ENV_ROUTE_TO_LAT,
        })?;
        let to_lng = args.to_lng.ok_or(CliError::MissingArgument {
            field: ARG_TO_LNG,
            env: ENV_ROUTE_TO_LNG,
        })?;
        Ok(Self {
            origin: point(from_lat, from_lng),
            destination: point(to_lat, to_lng),
            search_radius_km: args.radius_km.unwrap_or(DEFAULT_SEARCH_RADIUS_KM),
            travel_mode: args.travel_mode.unwrap_or_default(),
            params: selection_params(args.exclusion_radius_km, args.max_waypoints)?,
            backend_url: args
                .backend_url
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned()),
            osrm_base_url: args
                .osrm_base_url
                .unwrap_or_else(|| DEFAULT_OSRM_URL.to_owned()),
        })
    }
}

pub(crate) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_route_with(args, &HttpServiceBuilder, &mut stdout)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    builder: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let route = execute_route(&config, builder)?;
    write_json(writer, &route)
}

pub(crate) fn execute_route(
    config: &RouteConfig,
    builder: &dyn ServiceBuilder,
) -> Result<SafeRoute, CliError> {
    let spots = builder.spot_source(&config.backend_url)?;
    let router = builder.route_planner(&config.osrm_base_url)?;
    let planner = SafeRoutePlanner::new(&*spots, &*router)
        .with_selector(WaypointSelector::new(config.params))
        .with_search_radius_km(config.search_radius_km);
    Ok(planner.plan(config.origin, config.destination, config.travel_mode)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
