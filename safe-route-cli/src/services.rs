//! Construction of the backend and OSRM clients.

use safe_route_core::{RoutePlanner, SafeSpotSource};
use safe_route_data::routing::OsrmRoutePlanner;
use safe_route_data::spots::HttpSafeSpotSource;

use crate::CliError;

/// Builds the network collaborators for one invocation.
pub(crate) trait ServiceBuilder {
    fn spot_source(&self, backend_url: &str) -> Result<Box<dyn SafeSpotSource>, CliError>;
    fn route_planner(&self, osrm_base_url: &str) -> Result<Box<dyn RoutePlanner>, CliError>;
}

/// Builds the HTTP clients from `safe-route-data`.
pub(crate) struct HttpServiceBuilder;

impl ServiceBuilder for HttpServiceBuilder {
    fn spot_source(&self, backend_url: &str) -> Result<Box<dyn SafeSpotSource>, CliError> {
        let source =
            HttpSafeSpotSource::new(backend_url).map_err(|source| CliError::BuildClient {
                service: "safe-spot backend",
                base_url: backend_url.to_owned(),
                source,
            })?;
        Ok(Box::new(source))
    }

    fn route_planner(&self, osrm_base_url: &str) -> Result<Box<dyn RoutePlanner>, CliError> {
        let planner =
            OsrmRoutePlanner::new(osrm_base_url).map_err(|source| CliError::BuildClient {
                service: "OSRM",
                base_url: osrm_base_url.to_owned(),
                source,
            })?;
        Ok(Box::new(planner))
    }
}
