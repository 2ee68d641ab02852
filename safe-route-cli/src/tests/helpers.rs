//! Test helpers for writing request files and stubbing network services.

use std::cell::RefCell;

use camino::{Utf8Path, Utf8PathBuf};
use safe_route_core::test_support::{MemorySpotSource, StraightLineRoutePlanner};
use safe_route_core::{RoutePlanner, SafeSpot, SafeSpotError, SafeSpotSource, point};
use safe_route_data::spots::test_support::StubSafeSpotSource;
use tempfile::TempDir;

use crate::CliError;
use crate::services::ServiceBuilder;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Spots placed along a journey from 51.5,-0.1 to 51.52,-0.08.
pub(super) fn journey_spots() -> Vec<SafeSpot> {
    vec![
        SafeSpot::new("near-start", point(51.502, -0.098)).with_categories(["police"]),
        SafeSpot::new("middle", point(51.51, -0.09)).with_categories(["library"]),
        SafeSpot::new("near-end", point(51.518, -0.082)).with_categories(["hospital"]),
    ]
}

/// Stub services recording which base URLs were requested.
#[derive(Debug, Default)]
pub(super) struct StubServiceBuilder {
    pub(super) spots: Vec<SafeSpot>,
    pub(super) spot_error: Option<SafeSpotError>,
    pub(super) backend_urls: RefCell<Vec<String>>,
    pub(super) osrm_urls: RefCell<Vec<String>>,
}

impl StubServiceBuilder {
    pub(super) fn with_spots(spots: Vec<SafeSpot>) -> Self {
        Self {
            spots,
            ..Self::default()
        }
    }

    pub(super) fn failing(error: SafeSpotError) -> Self {
        Self {
            spot_error: Some(error),
            ..Self::default()
        }
    }
}

impl ServiceBuilder for StubServiceBuilder {
    fn spot_source(&self, backend_url: &str) -> Result<Box<dyn SafeSpotSource>, CliError> {
        self.backend_urls.borrow_mut().push(backend_url.to_owned());
        Ok(match &self.spot_error {
            Some(error) => Box::new(StubSafeSpotSource::with_error(error.clone())),
            None => Box::new(MemorySpotSource::with_spots(self.spots.clone())),
        })
    }

    fn route_planner(&self, osrm_base_url: &str) -> Result<Box<dyn RoutePlanner>, CliError> {
        self.osrm_urls.borrow_mut().push(osrm_base_url.to_owned());
        Ok(Box::new(StraightLineRoutePlanner))
    }
}
