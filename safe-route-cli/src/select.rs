//! Select command implementation for the safe-route CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use safe_route_core::location::latlng;
use safe_route_core::{
    DEFAULT_EXCLUSION_RADIUS_KM, DEFAULT_MAX_WAYPOINTS, RouteRequest, SafeSpot, SelectionParams,
    TravelMode, WaypointSelector,
};
use serde::{Deserialize, Serialize};

use crate::fs::open_utf8_file;
use crate::output::write_json;
use crate::{
    ARG_EXCLUSION_RADIUS_KM, ARG_MAX_WAYPOINTS, ARG_SELECT_REQUEST, CliError, ENV_SELECT_REQUEST,
};

/// CLI arguments for the `select` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "select",
    long_about = "Run waypoint selection over a JSON request holding the \
                 journey endpoints and candidate safe spots, and print the \
                 route request that would be sent to the routing engine. \
                 No network access is needed.",
    about = "Choose waypoints for a journey, offline"
)]
#[ortho_config(prefix = "SAFE_ROUTE")]
pub(crate) struct SelectArgs {
    /// Path to a JSON file containing a select request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Minimum distance in kilometres between a waypoint and either endpoint.
    #[arg(long = ARG_EXCLUSION_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) exclusion_radius_km: Option<f64>,
    /// Maximum number of waypoints to select.
    #[arg(long = ARG_MAX_WAYPOINTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_waypoints: Option<usize>,
}

impl SelectArgs {
    pub(crate) fn into_config(self) -> Result<SelectConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SelectConfig::try_from(merged)
    }
}

/// Resolved `select` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SelectConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Validated selector tuning.
    pub(crate) params: SelectionParams,
}

impl TryFrom<SelectArgs> for SelectConfig {
    type Error = CliError;

    fn try_from(args: SelectArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SELECT_REQUEST,
            env: ENV_SELECT_REQUEST,
        })?;
        let params = selection_params(args.exclusion_radius_km, args.max_waypoints)?;
        Ok(Self {
            request_path,
            params,
        })
    }
}

/// Build selector tuning, falling back to the library defaults.
pub(crate) fn selection_params(
    exclusion_radius_km: Option<f64>,
    max_waypoints: Option<usize>,
) -> Result<SelectionParams, CliError> {
    Ok(SelectionParams::new(
        exclusion_radius_km.unwrap_or(DEFAULT_EXCLUSION_RADIUS_KM),
        max_waypoints.unwrap_or(DEFAULT_MAX_WAYPOINTS),
    )?)
}

/// Journey and candidates read by the `select` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SelectRequest {
    #[serde(with = "latlng")]
    pub(crate) origin: Coord<f64>,
    #[serde(with = "latlng")]
    pub(crate) destination: Coord<f64>,
    #[serde(default)]
    pub(crate) candidates: Vec<SafeSpot>,
    #[serde(default)]
    pub(crate) travel_mode: TravelMode,
}

pub(crate) fn run_select(args: SelectArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_select_with(args, &mut stdout)
}

pub(crate) fn run_select_with(args: SelectArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let request = load_select_request(&config.request_path)?;
    let route_request = execute_select(&config, &request)?;
    write_json(writer, &route_request)
}

fn execute_select(config: &SelectConfig, request: &SelectRequest) -> Result<RouteRequest, CliError> {
    let selection = WaypointSelector::new(config.params).select(
        request.origin,
        request.destination,
        &request.candidates,
    )?;
    log::info!(
        "selected {} of {} candidate spot(s): {:?}",
        selection.len(),
        request.candidates.len(),
        selection.spot_ids()
    );
    Ok(
        RouteRequest::new(request.origin, request.destination, selection.into_waypoints())
            .with_travel_mode(request.travel_mode),
    )
}

/// Loads a JSON-encoded [`SelectRequest`] from disk.
pub(crate) fn load_select_request(path: &Utf8Path) -> Result<SelectRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSelectRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSelectRequest {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SelectConfig, CliError> {
    let merged = SelectArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SelectConfig::try_from(merged)
}
