// crates/parkdb-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

//! Dataset download helper (feature `fetch`).
//!
//! Pulls the two static datasets into the data directory so the CLI can be
//! used without checking large files into the repository. The enrichment
//! JSON is curated by hand and is never fetched.

use crate::dashboard::Dashboard;
use crate::error::{ParkDbError, Result};
use crate::model::DefaultBackend;
use std::fs;
use std::path::Path;

/// `(filename, url)` pairs for the fetchable datasets.
pub const DATASET_URLS: [(&str, &str); 2] = [
    (
        "WDPA_parks.csv",
        "https://www.protectedplanet.net/downloads/WDPA_Dec2025_Public_AF_csv.csv",
    ),
    (
        "parks.json",
        "https://www.protectedplanet.net/downloads/WDPA_Dec2025_Public_AF.geojson",
    ),
];

impl Dashboard<DefaultBackend> {
    /// Download both datasets into `dir`, overwriting existing files.
    ///
    /// Uses the blocking reqwest client; this is CLI tooling, not part of
    /// the dashboard runtime.
    pub fn fetch_datasets(dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        for (filename, url) in DATASET_URLS {
            let response = reqwest::blocking::get(url)
                .and_then(|r| r.error_for_status())
                .map_err(|e| ParkDbError::Fetch(format!("{url}: {e}")))?;
            let bytes = response
                .bytes()
                .map_err(|e| ParkDbError::Fetch(format!("{url}: {e}")))?;
            fs::write(dir.join(filename), &bytes)?;
        }

        Ok(())
    }
}
