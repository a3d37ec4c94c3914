//! Advanced filtering and selection example for parkdb-rs
//!
//! This example demonstrates how to:
//! - Drive the dashboard selection state the way a UI layer would
//! - Build the sidebar card and detail-panel view-models
//! - Work with the curated enrichment fields

use parkdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ParkDB-RS Advanced Filtering Example ===\n");

    let mut dash = Dashboard::load()?;

    // Example 1: Search the way the sidebar does
    println!("--- Example 1: Keyword search ---");
    let hits = dash.db().find_parks_by_substring("mara");
    for park in &hits {
        println!("- {} ({})", park.name(), park.country());
    }
    println!();

    // Example 2: Select a park and inspect the change set
    println!("--- Example 2: Selection ---");
    if let Some(first) = hits.first().map(|p| p.id().to_string()) {
        let change = dash.set_active_park(Some(&first));
        println!("Selected: {:?}", change.selected);
        println!("Deselected: {:?}", change.deselected);

        if let Some(detail) = dash.detail_view() {
            println!("Detail panel: {} — {}", detail.name, detail.country);
            println!("  Type: {} (IUCN {})", detail.designation, detail.iucn_category);
            println!("  Area: {}", detail.area_label);
            println!("  Established: {}", detail.year_label);
            if !detail.tags.is_empty() {
                println!("  Tags: {}", detail.tags.join(", "));
            }
        }
        if let Some(info) = dash.map_info() {
            println!("Map popup: {} / {}", info.name, info.country);
        }
    }
    println!();

    // Example 3: Active card is flagged in the list
    println!("--- Example 3: Card views ---");
    let cards = dash.card_views(FilterMode::Park, "");
    let active = cards.iter().filter(|c| c.active).count();
    println!("{} cards, {} active", cards.len(), active);
    println!();

    // Example 4: Enriched parks only
    println!("--- Example 4: Curated enrichment ---");
    let enriched: Vec<_> = dash
        .db()
        .parks()
        .iter()
        .filter(|p| p.is_enriched())
        .collect();
    println!("Enriched parks: {}", enriched.len());
    for park in enriched.iter().take(5) {
        let species: Vec<&str> = park.main_species().collect();
        println!(
            "- {} (big five: {}, migration route: {}, species: [{}])",
            park.name(),
            park.has_big_five,
            park.in_migration_route,
            species.join(", ")
        );
    }
    println!();

    // Example 5: Clearing the selection
    println!("--- Example 5: Clear selection ---");
    let change = dash.set_active_park(None);
    println!("Deselected: {:?}", change.deselected);
    println!("Detail panel now: {:?}", dash.detail_view().map(|d| d.name));

    println!("\n=== Example completed successfully ===");
    Ok(())
}
