//! Error types emitted by the safe-route CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use safe_route_core::{SafeRouteError, SafeSpotError, SelectionError, SelectionParamsError};
use safe_route_data::ClientBuildError;
use thiserror::Error;

/// Errors emitted by the safe-route CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Selector tuning options were out of range.
    #[error("invalid selection options: {0}")]
    InvalidSelectionParams(#[from] SelectionParamsError),
    /// Opening the select request file failed.
    #[error("failed to open select request at {path:?}: {source}")]
    OpenSelectRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Select request JSON could not be decoded.
    #[error("failed to parse select request JSON at {path:?}: {source}")]
    ParseSelectRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The selector rejected the journey endpoints.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Constructing an HTTP client failed.
    #[error("failed to build {service} client for {base_url:?}: {source}")]
    BuildClient {
        service: &'static str,
        base_url: String,
        #[source]
        source: ClientBuildError,
    },
    /// Fetching safe spots failed.
    #[error(transparent)]
    SafeSpots(#[from] SafeSpotError),
    /// Planning the safe route failed.
    #[error(transparent)]
    Plan(#[from] SafeRouteError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
