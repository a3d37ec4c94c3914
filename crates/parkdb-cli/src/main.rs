//! parkdb-cli — Command-line interface for parkdb-core
//!
//! This binary provides a simple way to inspect the protected-area database
//! from your terminal. It supports printing basic statistics, listing parks
//! with the same filter modes the dashboard sidebar offers, showing the
//! detail panel for a single park, listing countries, and previewing the
//! year color scale.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ parkdb-cli stats
//!
//! - List all parks, or filter them
//!   $ parkdb-cli parks
//!   $ parkdb-cli parks serengeti
//!   $ parkdb-cli parks tanzania --mode country
//!
//! - Show details for a park by WDPA site id
//!   $ parkdb-cli park 916
//!
//! - Preview the polygon fill color for a year
//!   $ parkdb-cli color 1951
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the datasets bundled under the `parkdb-core`
//! crate's `data/` directory and caches a binary version of the parsed CSV
//! next to it for fast subsequent runs. Use `--csv`, `--geojson` and
//! `--enrichment` to point at custom files.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use parkdb_core::{Dashboard, FilterMode, ParkSearch};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Determine input files (defaults live inside parkdb-core)
    let data_dir = Dashboard::default_data_dir();
    let csv_path = args
        .csv
        .unwrap_or_else(|| data_dir.join(Dashboard::default_csv_filename()).display().to_string());
    let geojson_path = args.geojson.unwrap_or_else(|| {
        data_dir
            .join(Dashboard::default_geojson_filename())
            .display()
            .to_string()
    });
    let enrichment_path = args.enrichment.unwrap_or_else(|| {
        data_dir
            .join(Dashboard::default_enrichment_filename())
            .display()
            .to_string()
    });

    #[cfg(feature = "fetch")]
    if matches!(args.command, Commands::Fetch) {
        println!("Downloading datasets into {}...", data_dir.display());
        Dashboard::fetch_datasets(&data_dir)?;
        println!("Done.");
        return Ok(());
    }

    let dash = Dashboard::load_from_paths(&csv_path, &geojson_path, Some(&enrichment_path))?;
    let db = dash.db();

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Database statistics:");
            println!("  Parks: {}", stats.parks);
            println!("  Countries: {}", stats.countries);
            println!("  Enriched parks: {}", stats.enriched);
            if let Some((min, max)) = dash.scale().bounds() {
                println!("  Establishment years: {min}–{max}");
            }
        }

        Commands::Parks { query, mode } => {
            let mode: FilterMode = mode
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let keyword = query.unwrap_or_default();
            let matches = db.filter_parks(mode, &keyword);
            if matches.is_empty() {
                println!("No parks found with current filter.");
            } else {
                for park in matches {
                    println!(
                        "{} — {}, {} ({})",
                        park.id(),
                        park.name(),
                        park.country(),
                        park.designation()
                    );
                }
            }
        }

        Commands::Park { id } => match db.find_park_by_id(&id) {
            Some(park) => {
                println!("Park: {}", park.name());
                println!("Country: {} ({})", park.country(), park.country_iso3());
                println!("Type: {} (IUCN {})", park.designation(), park.iucn_category());
                match park.area_km2() {
                    Some(area) => println!("Reported area: {area} km²"),
                    None => println!("Reported area: N/A"),
                }
                match dash.status_year_for(park) {
                    Some(year) => println!("Year established: {year}"),
                    None => println!("Year established: N/A"),
                }
                println!("Manager: {}", park.gov_type());
                let species: Vec<&str> = park.main_species().collect();
                if !species.is_empty() {
                    println!("Key species: {}", species.join(", "));
                }
                match park.storymap_url() {
                    Some(url) => println!("Story map: {url}"),
                    None => println!("Story map: unavailable"),
                }
                println!("On map: {}", dash.has_geometry(park.id()));
                println!("Fill color: {}", dash.color_for_park(park.id()));
            }
            None => {
                eprintln!("No park found for: {id}");
            }
        },

        Commands::Countries => {
            for country in db.countries() {
                println!("{country}");
            }
        }

        Commands::Color { year } => {
            println!("{}", dash.scale().color_for_year(Some(year)));
        }

        #[cfg(feature = "fetch")]
        Commands::Fetch => unreachable!("handled before loading"),
    }

    Ok(())
}
