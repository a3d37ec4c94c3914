// crates/parkdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, decompression, caching) and hands the
//! decoded texts to the transform pipeline. Two inputs are required — the
//! WDPA CSV and the parks GeoJSON — plus the optional enrichment JSON.
//! A failed load means the dashboard does not initialize; there is no retry.

use crate::dashboard::Dashboard;
use crate::error::{ParkDbError, Result};
use crate::model::{build_parkdb, DefaultBackend, DefaultParkDb};
use crate::raw::{EnrichmentRaw, FeatureCollectionRaw};
use crate::CsvTable;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "fetch")]
mod fetch;
#[cfg(feature = "fetch")]
pub use fetch::DATASET_URLS;

// Single in-process cache so we only parse the datasets once per process.
static DASHBOARD_CACHE: OnceCell<Dashboard<DefaultBackend>> = OnceCell::new();

/// Suffix of the bincode cache written next to the CSV.
const CACHE_SUFFIX: &str = "parkdb.bin";

impl Dashboard<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_csv_filename() -> &'static str {
        "WDPA_parks.csv"
    }

    pub fn default_geojson_filename() -> &'static str {
        "parks.json"
    }

    pub fn default_enrichment_filename() -> &'static str {
        "parks-meta.json"
    }

    /// Load the dashboard from the default dataset under `data/`.
    ///
    /// The result is cached process-wide; subsequent calls clone the cached
    /// state (each caller gets its own selection). Paths resolve relative to
    /// the crate root (`CARGO_MANIFEST_DIR`), so this works both when running
    /// the demos and when using the crate as a dependency, as long as the
    /// `data/` directory is shipped alongside.
    pub fn load() -> Result<Self> {
        DASHBOARD_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                Self::load_from_paths(
                    dir.join(Self::default_csv_filename()),
                    dir.join(Self::default_geojson_filename()),
                    Some(dir.join(Self::default_enrichment_filename())),
                )
            })
            .cloned()
    }

    /// Load from explicit paths.
    ///
    /// The enrichment path is optional twice over: pass `None` to skip it,
    /// and a path that does not exist on disk is silently treated the same
    /// way (the curated list ships separately from the WDPA export).
    pub fn load_from_paths(
        csv_path: impl AsRef<Path>,
        geojson_path: impl AsRef<Path>,
        enrichment_path: Option<impl AsRef<Path>>,
    ) -> Result<Self> {
        let csv_path = csv_path.as_ref();
        let geojson_path = geojson_path.as_ref();

        let enrichment_path = enrichment_path
            .as_ref()
            .map(|p| p.as_ref())
            .filter(|p| p.exists());
        let enrichment: Option<Vec<EnrichmentRaw>> = match enrichment_path {
            Some(p) => Some(serde_json::from_reader(open_stream(p)?)?),
            None => None,
        };

        let db = load_or_build_db(csv_path, enrichment.as_deref(), enrichment_path)?;

        let features: FeatureCollectionRaw = serde_json::from_reader(open_stream(geojson_path)?)?;

        Ok(Dashboard::new(db, &features))
    }
}

/// Try the bincode cache next to the CSV first; fall back to a fresh parse
/// and then write the cache best-effort (ignore errors).
///
/// The cached database depends on which enrichment file was overlaid, so the
/// cache stores that path alongside the data and is only served when the
/// current load uses the same enrichment source.
fn load_or_build_db(
    csv_path: &Path,
    enrichment: Option<&[EnrichmentRaw]>,
    enrichment_path: Option<&Path>,
) -> Result<DefaultParkDb> {
    let cache_path = get_cache_path(csv_path, CACHE_SUFFIX);
    let enrichment_key = enrichment_path
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    if is_cache_fresh(csv_path, enrichment_path, &cache_path) {
        if let Ok(bytes) = std::fs::read(&cache_path) {
            if let Ok((cached_key, db)) = bincode::deserialize::<(String, DefaultParkDb)>(&bytes) {
                if cached_key == enrichment_key {
                    return Ok(db);
                }
            }
        }
    }

    let mut text = String::new();
    open_stream(csv_path)?.read_to_string(&mut text)?;

    let db = build_parkdb::<DefaultBackend>(&CsvTable::parse(&text), enrichment);

    if let Ok(bin) = bincode::serialize(&(&enrichment_key, &db)) {
        let _ = std::fs::write(&cache_path, bin);
    }

    Ok(db)
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension says so. Returns a generic reader so callers don't care about
/// the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        ParkDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    let is_gz = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if is_gz {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        return Err(ParkDbError::InvalidData(
            "gzip input requires the 'compact' feature".into(),
        ));
    }

    Ok(Box::new(reader))
}

fn get_cache_path(csv_path: &Path, suffix: &str) -> PathBuf {
    let filename = csv_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    csv_path.with_file_name(format!("{filename}.{suffix}"))
}

/// A cache is stale once the CSV, or the enrichment file actually used for
/// this load, is newer than the cache file.
fn is_cache_fresh(csv_path: &Path, enrichment_path: Option<&Path>, cache_path: &Path) -> bool {
    let cache_time = match std::fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    if let Ok(csv_time) = std::fs::metadata(csv_path).and_then(|m| m.modified()) {
        if csv_time > cache_time {
            return false;
        }
    }
    if let Some(meta_path) = enrichment_path {
        if let Ok(meta_time) = std::fs::metadata(meta_path).and_then(|m| m.modified()) {
            if meta_time > cache_time {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_csv_is_not_found() {
        let dir = std::env::temp_dir().join("parkdb-missing");
        let err = Dashboard::load_from_paths(
            dir.join("no.csv"),
            dir.join("no.json"),
            None::<PathBuf>,
        )
        .unwrap_err();
        assert!(matches!(err, ParkDbError::NotFound(_)));
    }

    #[test]
    fn cache_path_is_derived_from_csv_name() {
        let p = get_cache_path(Path::new("/data/WDPA_parks.csv"), CACHE_SUFFIX);
        assert_eq!(p, Path::new("/data/WDPA_parks.csv.parkdb.bin"));
    }

    #[test]
    fn cache_is_keyed_to_the_enrichment_source() {
        let dir = std::env::temp_dir().join(format!("parkdb-cache-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let csv = dir.join("parks.csv");
        std::fs::write(
            &csv,
            "SITE_ID,NAME_ENG,NAME,ISO3,DESIG_ENG,IUCN_CAT,REP_AREA,STATUS_YR,GOV_TYPE,MANG_AUTH\n\
             916,Serengeti,Serengeti,TZA,National Park,II,14763,1951,Federal,TANAPA",
        )
        .unwrap();
        let geojson = dir.join("parks.json");
        std::fs::write(&geojson, r#"{"type": "FeatureCollection", "features": []}"#).unwrap();

        let e1 = dir.join("e1.json");
        std::fs::write(&e1, r#"[{"wdpa_site_id": 916, "visitors_2024": 100}]"#).unwrap();
        let e2 = dir.join("e2.json");
        std::fs::write(&e2, r#"[{"wdpa_site_id": 916, "visitors_2024": 999}]"#).unwrap();

        // First load populates the cache from e1; the later loads use a
        // different enrichment source and must not be served from it.
        let first = Dashboard::load_from_paths(&csv, &geojson, Some(&e1)).unwrap();
        assert_eq!(first.db().find_park_by_id("916").unwrap().visitors_2024, 100);

        let second = Dashboard::load_from_paths(&csv, &geojson, Some(&e2)).unwrap();
        assert_eq!(second.db().find_park_by_id("916").unwrap().visitors_2024, 999);

        let third = Dashboard::load_from_paths(&csv, &geojson, None::<PathBuf>).unwrap();
        assert_eq!(third.db().find_park_by_id("916").unwrap().visitors_2024, 0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
