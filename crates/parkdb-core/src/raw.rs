// crates/parkdb-core/src/raw.rs
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw enrichment entry for one of the curated parks, as in the JSON:
/// {
///   "wdpa_site_id": 916,
///   "visitors_2024": 350000,
///   "predator_index": 8.5,
///   "has_big_five": true,
///   "in_migration_route": true,
///   "main_species": ["Lion", "Wildebeest"],
///   "storymap_url": "https://..."
/// }
///
/// Every field is optional in the source file; missing fields take the same
/// defaults the base metadata uses, so an enrichment entry can only ever
/// supplement a park, never blank it out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrichmentRaw {
    /// Site id as found in the file; numbers are coerced to strings so the
    /// key matches the CSV-derived park id.
    #[serde(default, deserialize_with = "de_id_string")]
    pub wdpa_site_id: Option<String>,
    #[serde(default)]
    pub visitors_2024: u32,
    #[serde(default)]
    pub predator_index: f64,
    #[serde(default)]
    pub has_big_five: bool,
    #[serde(default)]
    pub in_migration_route: bool,
    #[serde(default)]
    pub main_species: Vec<String>,
    #[serde(default)]
    pub storymap_url: String,
}

impl EnrichmentRaw {
    pub fn site_id(&self) -> Option<&str> {
        self.wdpa_site_id.as_deref()
    }
}

/// Accept a JSON string or number and normalize to a string key.
fn de_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// Minimal GeoJSON feature collection shape.
///
/// Geometry coordinates stay opaque; only the properties the dashboard joins
/// on (`SITE_ID`, `STATUS_YR`) are interpreted. Everything else is carried
/// through untouched for the rendering layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollectionRaw {
    #[serde(default)]
    pub features: Vec<FeatureRaw>,
}

/// One GeoJSON feature; properties are kept as a raw JSON map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureRaw {
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
}

impl FeatureRaw {
    /// `SITE_ID` property coerced to a string key; `None` when absent.
    pub fn site_id(&self) -> Option<String> {
        match self.properties.get("SITE_ID")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// `STATUS_YR` property when it is a positive JSON number; the export
    /// writes 0 for "not reported".
    pub fn status_yr(&self) -> Option<i32> {
        self.properties
            .get("STATUS_YR")
            .and_then(Value::as_f64)
            .map(|y| y as i32)
            .filter(|y| *y > 0)
    }
}
