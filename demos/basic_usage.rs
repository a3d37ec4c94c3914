//! Basic usage example for parkdb-rs
//!
//! This example demonstrates how to:
//! - Load the parks dashboard from the bundled datasets
//! - List and look up parks
//! - Use the filter modes from the sidebar
//! - Query the year color scale

use parkdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ParkDB-RS Basic Usage Example ===\n");

    // Load the dashboard (CSV + GeoJSON + enrichment)
    println!("Loading protected-area datasets...");
    let dash = Dashboard::load()?;
    let db = dash.db();
    println!("✓ Dashboard loaded successfully\n");

    // Example 1: Database statistics
    println!("--- Example 1: Database statistics ---");
    let stats = db.stats();
    println!("Parks: {}", stats.parks);
    println!("Countries: {}", stats.countries);
    println!("Enriched parks: {}", stats.enriched);
    println!();

    // Example 2: List the first parks (already sorted by country + name)
    println!("--- Example 2: List parks ---");
    for (i, park) in db.parks().iter().take(5).enumerate() {
        println!(
            "{}. {} — {} ({})",
            i + 1,
            park.name(),
            park.country(),
            park.designation()
        );
    }
    println!("... and {} more\n", db.park_count().saturating_sub(5));

    // Example 3: Find a specific park by site id
    println!("--- Example 3: Find park by site id ---");
    if let Some(park) = db.find_park_by_id("916") {
        println!("Found: {}", park.name());
        println!("IUCN category: {}", park.iucn_category());
        println!("Area: {:?} km²", park.area_km2());
        println!("Established: {:?}", dash.status_year_for(park));
        println!("Fill color: {}", dash.color_for_park(park.id()));
    }
    println!();

    // Example 4: Filter modes
    println!("--- Example 4: Filter parks ---");
    let in_tanzania = db.filter_parks(FilterMode::Country, "tanzania");
    println!("Parks in Tanzania: {}", in_tanzania.len());
    let category_ii = db.filter_parks(FilterMode::Iucn, "ii");
    println!("Parks with IUCN II: {}", category_ii.len());
    println!();

    // Example 5: Countries covered by the dataset
    println!("--- Example 5: Countries ---");
    for country in db.countries() {
        println!("- {country}");
    }
    println!();

    // Example 6: Year color scale
    println!("--- Example 6: Year color scale ---");
    if let Some((min, max)) = dash.scale().bounds() {
        println!("Year bounds: {min}–{max}");
        for year in [min, (min + max) / 2, max] {
            println!("{year} -> {}", dash.scale().color_for_year(Some(year)));
        }
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
