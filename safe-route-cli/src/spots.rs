//! Spots command implementation for the safe-route CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use safe_route_core::{SafeSpotQuery, SpotCategory, point};
use safe_route_data::spots::DEFAULT_BACKEND_URL;
use serde::{Deserialize, Serialize};

use crate::output::write_json;
use crate::services::{HttpServiceBuilder, ServiceBuilder};
use crate::{
    ARG_BACKEND_URL, ARG_CATEGORY, ARG_LAT, ARG_LNG, ARG_RADIUS_KM, CliError, ENV_SPOTS_LAT,
    ENV_SPOTS_LNG,
};

/// CLI arguments for the `spots` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "spots",
    long_about = "Ask the safe-spot backend for spots within a radius of a \
                 point, optionally restricted to one category such as \
                 police or hospital, and print them as JSON.",
    about = "List safe spots near a point",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "SAFE_ROUTE")]
pub(crate) struct SpotsArgs {
    /// Latitude of the search centre in degrees.
    #[arg(long = ARG_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search centre in degrees.
    #[arg(long = ARG_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Search radius in kilometres (default 2.5).
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// Restrict results to one category, e.g. "police" or "fire station".
    #[arg(long = ARG_CATEGORY, value_name = "category")]
    #[serde(default)]
    pub(crate) category: Option<SpotCategory>,
    /// Base URL of the safe-spot backend (e.g. "http://localhost:8080").
    #[arg(long = ARG_BACKEND_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) backend_url: Option<String>,
}

impl SpotsArgs {
    pub(crate) fn into_config(self) -> Result<SpotsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SpotsConfig::try_from(merged)
    }
}

/// Resolved `spots` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SpotsConfig {
    /// Validated search area.
    pub(crate) query: SafeSpotQuery,
    /// Base URL of the safe-spot backend.
    pub(crate) backend_url: String,
}

impl TryFrom<SpotsArgs> for SpotsConfig {
    type Error = CliError;

    fn try_from(args: SpotsArgs) -> Result<Self, Self::Error> {
        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_SPOTS_LAT,
        })?;
        let lng = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LNG,
            env: ENV_SPOTS_LNG,
        })?;
        let mut query = SafeSpotQuery::around(point(lat, lng));
        if let Some(radius_km) = args.radius_km {
            query = query.with_radius_km(radius_km);
        }
        query.category = args.category;
        query.validate()?;
        Ok(Self {
            query,
            backend_url: args
                .backend_url
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned()),
        })
    }
}

pub(crate) fn run_spots(args: SpotsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_spots_with(args, &HttpServiceBuilder, &mut stdout)
}

pub(crate) fn run_spots_with(
    args: SpotsArgs,
    builder: &dyn ServiceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let source = builder.spot_source(&config.backend_url)?;
    let spots = source.spots_near(&config.query)?;
    write_json(writer, &spots)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SpotsConfig, CliError> {
    let merged = SpotsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SpotsConfig::try_from(merged)
}
