#![cfg(target_arch = "wasm32")]
// Run with `wasm-pack test --node` (or --headless --firefox).

use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use parkdb_wasm::{has_geometry, init_dashboard, park_color, park_count, select_park};

const CSV: &str = "\
SITE_ID,NAME_ENG,NAME,ISO3,DESIG_ENG,IUCN_CAT,REP_AREA,STATUS_YR,GOV_TYPE,MANG_AUTH
916,Serengeti,Serengeti,TZA,National Park,II,14763,1951,Federal,TANAPA
754,Maasai Mara,Mara,KEN,National Reserve,Not Reported,1510,1974,State,Narok County";

const GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"SITE_ID": 916, "STATUS_YR": 1951}}
    ]
}"#;

#[wasm_bindgen_test]
fn can_build_dashboard_from_texts() {
    init_dashboard(CSV, GEOJSON, None).expect("dashboard initializes");

    assert_eq!(park_count(), 2);
    assert!(has_geometry("916"));
    assert!(!has_geometry("754"));
}

#[wasm_bindgen_test]
fn selection_and_color() {
    init_dashboard(CSV, GEOJSON, None).expect("dashboard initializes");

    let _ = select_park("916");
    let color = park_color("916").expect("initialized");
    assert!(color.starts_with('#'));
}
