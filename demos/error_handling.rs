//! Error handling example for parkdb-rs
//!
//! This example demonstrates proper error handling and edge cases

use parkdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ParkDB-RS Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading dashboard with error handling ---");
    match Dashboard::load() {
        Ok(dash) => {
            println!("✓ Dashboard loaded successfully");
            println!("  Parks: {}", dash.db().park_count());
        }
        Err(e) => {
            eprintln!("✗ Failed to load datasets: {e}");
            return Err(e);
        }
    }
    println!();

    let mut dash = Dashboard::load()?;

    // Example 2: Looking up ids that do not exist
    println!("--- Example 2: Searching for non-existent parks ---");
    for id in ["0", "999999", "not-an-id"] {
        match dash.db().find_park_by_id(id) {
            Some(park) => println!("  Found: {} ({})", park.name(), park.id()),
            None => println!("  Not found: {id}"),
        }
    }
    println!();

    // Example 3: Selection never dangles
    println!("--- Example 3: Selecting an unknown id ---");
    let change = dash.set_active_park(Some("not-an-id"));
    println!("  Change: {change:?}");
    println!("  Active park: {:?}", dash.active_park_id());
    println!();

    // Example 4: Color queries degrade instead of failing
    println!("--- Example 4: Degraded color lookups ---");
    println!("  Unknown park: {}", dash.color_for_park("not-an-id"));
    println!("  Missing year: {}", dash.scale().color_for_year(None));

    // Example 5: Malformed CSV degrades to defaults, never errors
    println!("--- Example 5: Malformed rows ---");
    let table = CsvTable::parse(
        "SITE_ID,NAME_ENG,NAME,ISO3,DESIG_ENG,IUCN_CAT,REP_AREA,STATUS_YR,GOV_TYPE,MANG_AUTH\n\
         1,,,ABC,National Park,II,not-a-number,also-bad,,",
    );
    let db: DefaultParkDb = build_parkdb(&table, None);
    let park = &db.parks()[0];
    println!("  Name fallback: {}", park.name());
    println!("  Area: {:?}", park.area_km2());
    println!("  Year: {:?}", park.status_year());

    Ok(())
}
