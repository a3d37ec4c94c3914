use clap::{Parser, Subcommand};

/// CLI arguments for parkdb-cli
#[derive(Debug, Parser)]
#[command(
    name = "parkdb",
    version,
    about = "CLI for querying and inspecting the parkdb-core protected-area database"
)]
pub struct CliArgs {
    /// Path to the WDPA CSV export (default: data/WDPA_parks.csv)
    #[arg(long = "csv", global = true)]
    pub csv: Option<String>,

    /// Path to the parks GeoJSON layer (default: data/parks.json)
    #[arg(long = "geojson", global = true)]
    pub geojson: Option<String>,

    /// Path to the curated enrichment JSON (default: data/parks-meta.json)
    #[arg(long = "enrichment", global = true)]
    pub enrichment: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List parks, optionally filtered
    Parks {
        /// Keyword to filter by (empty lists everything)
        query: Option<String>,

        /// Filter mode: park, country or iucn
        #[arg(short = 'm', long = "mode", default_value = "park")]
        mode: String,
    },

    /// Show the detail panel for one park
    Park {
        /// WDPA site id (e.g. 916)
        id: String,
    },

    /// List the countries covered by the dataset
    Countries,

    /// Print the polygon fill color for an establishment year
    Color {
        /// Establishment year (e.g. 1951)
        year: i32,
    },

    /// Download the WDPA datasets into the data directory
    #[cfg(feature = "fetch")]
    Fetch,
}
