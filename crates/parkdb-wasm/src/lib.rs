//! parkdb-wasm — WebAssembly bindings for parkdb-core
//!
//! This crate exposes a small, ergonomic JS/WASM API built on top of
//! `parkdb-core`. The browser performs the two dataset fetches itself
//! (GeoJSON + CSV, joined with `Promise.all`) and hands the raw texts over;
//! from there the transform pipeline, search and selection state all run in
//! WASM.
//!
//! What it provides
//! ----------------
//! - `init_dashboard(csv_text, geojson_json, enrichment_json?)`
//! - Basic queries: `park_count()`, `get_stats()`
//! - List + detail view-models as JSON-serializable objects:
//!   - `list_parks("country", "tanz")`
//!   - `select_park("916")` / `clear_selection()`
//!   - `active_park_detail()`, `map_info()`
//! - Polygon styling input: `park_color("916")`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { init_dashboard, list_parks, select_park, park_color } from 'parkdb-wasm';
//!
//! async function main() {
//!   await init();
//!   const [geojson, csv] = await Promise.all([
//!     fetch('./data/parks.json').then((r) => r.text()),
//!     fetch('./data/WDPA_parks.csv').then((r) => r.text()),
//!   ]);
//!   init_dashboard(csv, geojson, null);
//!
//!   const cards = list_parks('park', '');
//!   const change = select_park(cards[0].id);
//!   // restyle change.deselected / change.selected, fill with park_color(id)
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable arrays/objects.
//! - Calling a query before `init_dashboard` returns empty/undefined values
//!   rather than throwing.

use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use parkdb_core::prelude::*;
use serde_json::json;
use serde_wasm_bindgen::to_value;

// Single dashboard instance per module; the browser event loop is the only
// caller, so a Mutex over an Option is all the coordination needed.
static DASHBOARD: Mutex<Option<DefaultDashboard>> = Mutex::new(None);

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"parkdb WASM module loaded; waiting for datasets".into());
}

/* --------------------------------------------------------------------------
   Initialization
-------------------------------------------------------------------------- */

/// Build the dashboard from raw dataset texts.
///
/// `enrichment_json` may be `null`/`undefined`; parks then keep their
/// default enrichment fields. Errors (undecodable GeoJSON or enrichment
/// JSON) are thrown to JS and the dashboard stays uninitialized.
///
/// The prelude's `Result` alias is fixed to `ParkDbError`; the std form is
/// spelled out so errors cross the boundary as `JsValue`.
#[wasm_bindgen]
pub fn init_dashboard(
    csv_text: &str,
    geojson_json: &str,
    enrichment_json: Option<String>,
) -> std::result::Result<(), JsValue> {
    let features: FeatureCollectionRaw =
        serde_json::from_str(geojson_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let enrichment: Option<Vec<EnrichmentRaw>> = match enrichment_json {
        Some(text) => {
            Some(serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?)
        }
        None => None,
    };

    let db = build_parkdb::<DefaultBackend>(&CsvTable::parse(csv_text), enrichment.as_deref());
    let dash = Dashboard::new(db, &features);

    let stats = dash.stats();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(
        &format!(
            "✓ Loaded {} parks across {} countries ({} enriched)",
            stats.parks, stats.countries, stats.enriched
        )
        .into(),
    );
    let _ = stats;

    *DASHBOARD.lock().unwrap() = Some(dash);
    Ok(())
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn park_count() -> usize {
    DASHBOARD
        .lock()
        .unwrap()
        .as_ref()
        .map(|d| d.db().park_count())
        .unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    let guard = DASHBOARD.lock().unwrap();
    let Some(dash) = guard.as_ref() else {
        return JsValue::UNDEFINED;
    };
    let stats = dash.stats();
    let stats = json!({
        "parks": stats.parks,
        "countries": stats.countries,
        "enriched": stats.enriched
    });

    to_value(&stats).unwrap()
}

/* --------------------------------------------------------------------------
   Park List
-------------------------------------------------------------------------- */

/// Filtered sidebar cards. `mode` is one of `"park" | "country" | "iucn"`;
/// unknown modes fall back to `"park"`. An empty keyword lists everything.
#[wasm_bindgen]
pub fn list_parks(mode: &str, keyword: &str) -> JsValue {
    let guard = DASHBOARD.lock().unwrap();
    let Some(dash) = guard.as_ref() else {
        return to_value::<Vec<ParkCardView>>(&Vec::new()).unwrap();
    };
    let mode = mode.parse().unwrap_or(FilterMode::Park);
    to_value(&dash.card_views(mode, keyword)).unwrap()
}

#[wasm_bindgen]
pub fn countries() -> JsValue {
    let guard = DASHBOARD.lock().unwrap();
    let Some(dash) = guard.as_ref() else {
        return to_value::<Vec<String>>(&Vec::new()).unwrap();
    };
    to_value(&dash.db().countries()).unwrap()
}

/* --------------------------------------------------------------------------
   Selection
-------------------------------------------------------------------------- */

/// Activate a park; returns the `{deselected, selected}` change set the UI
/// uses to restyle polygons and list cards.
#[wasm_bindgen]
pub fn select_park(id: &str) -> JsValue {
    let mut guard = DASHBOARD.lock().unwrap();
    let Some(dash) = guard.as_mut() else {
        return JsValue::UNDEFINED;
    };
    to_value(&dash.set_active_park(Some(id))).unwrap()
}

#[wasm_bindgen]
pub fn clear_selection() -> JsValue {
    let mut guard = DASHBOARD.lock().unwrap();
    let Some(dash) = guard.as_mut() else {
        return JsValue::UNDEFINED;
    };
    to_value(&dash.set_active_park(None)).unwrap()
}

#[wasm_bindgen]
pub fn active_park_detail() -> JsValue {
    let guard = DASHBOARD.lock().unwrap();
    let Some(dash) = guard.as_ref() else {
        return JsValue::UNDEFINED;
    };
    match dash.detail_view() {
        Some(detail) => to_value(&detail).unwrap(),
        None => JsValue::UNDEFINED,
    }
}

#[wasm_bindgen]
pub fn map_info() -> JsValue {
    let guard = DASHBOARD.lock().unwrap();
    let Some(dash) = guard.as_ref() else {
        return JsValue::UNDEFINED;
    };
    match dash.map_info() {
        Some(info) => to_value(&info).unwrap(),
        None => JsValue::UNDEFINED,
    }
}

/* --------------------------------------------------------------------------
   Styling
-------------------------------------------------------------------------- */

/// Polygon fill color for a park id, from the year color scale.
#[wasm_bindgen]
pub fn park_color(id: &str) -> Option<String> {
    DASHBOARD
        .lock()
        .unwrap()
        .as_ref()
        .map(|d| d.color_for_park(id))
}

/// Whether the park has a polygon in the loaded GeoJSON layer.
#[wasm_bindgen]
pub fn has_geometry(id: &str) -> bool {
    DASHBOARD
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|d| d.has_geometry(id))
}
